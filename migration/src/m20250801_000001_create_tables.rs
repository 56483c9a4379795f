use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(
                        ColumnDef::new(Students::Roll)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::Department).string().not_null())
                    .col(ColumnDef::new(Students::Year).integer().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建管理员表
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Name).string().not_null())
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Admins::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Admins::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表（仅档案，无登录账号）
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculties::Name).string().not_null())
                    .col(ColumnDef::new(Faculties::Department).string().not_null())
                    .col(ColumnDef::new(Faculties::Designation).string().not_null())
                    .col(
                        ColumnDef::new(Faculties::Email)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Faculties::Phone).string().null())
                    .col(
                        ColumnDef::new(Faculties::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Faculties::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Department).string().not_null())
                    .col(ColumnDef::new(Subjects::Semester).integer().not_null())
                    .col(
                        ColumnDef::new(Subjects::Credits)
                            .integer()
                            .not_null()
                            .default(3),
                    )
                    .col(ColumnDef::new(Subjects::FacultyId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建反馈表（账本，只追加）
        manager
            .create_table(
                Table::create()
                    .table(Feedbacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedbacks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Feedbacks::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Feedbacks::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Feedbacks::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Feedbacks::Q1).integer().not_null())
                    .col(ColumnDef::new(Feedbacks::Q2).integer().not_null())
                    .col(ColumnDef::new(Feedbacks::Q3).integer().not_null())
                    .col(ColumnDef::new(Feedbacks::Q4).integer().not_null())
                    .col(ColumnDef::new(Feedbacks::Q5).integer().not_null())
                    .col(
                        ColumnDef::new(Feedbacks::AverageRating)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Feedbacks::Comment).text().null())
                    .col(
                        ColumnDef::new(Feedbacks::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Feedbacks::Table, Feedbacks::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Feedbacks::Table, Feedbacks::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Feedbacks::Table, Feedbacks::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建已完成课程表（学生已提交反馈的课程集合）
        manager
            .create_table(
                Table::create()
                    .table(CompletedSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompletedSubjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompletedSubjects::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompletedSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompletedSubjects::CompletedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CompletedSubjects::Table, CompletedSubjects::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CompletedSubjects::Table, CompletedSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 反馈唯一约束：每个学生对每门课程至多一条反馈（并发提交时由数据库裁决唯一赢家）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_feedbacks_student_subject")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::StudentId)
                    .col(Feedbacks::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feedbacks_faculty_id")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::FacultyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feedbacks_subject_id")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::SubjectId)
                    .to_owned(),
            )
            .await?;

        // 完成集合唯一约束：集合语义，重复加入为幂等空操作
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_completed_subjects_student_subject")
                    .table(CompletedSubjects::Table)
                    .col(CompletedSubjects::StudentId)
                    .col(CompletedSubjects::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 课程表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_faculty_id")
                    .table(Subjects::Table)
                    .col(Subjects::FacultyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_department")
                    .table(Subjects::Table)
                    .col(Subjects::Department)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(CompletedSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Feedbacks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    Roll,
    Email,
    PasswordHash,
    Department,
    Year,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Faculties {
    #[sea_orm(iden = "faculties")]
    Table,
    Id,
    Name,
    Department,
    Designation,
    Email,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Code,
    Name,
    Department,
    Semester,
    Credits,
    FacultyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Feedbacks {
    #[sea_orm(iden = "feedbacks")]
    Table,
    Id,
    StudentId,
    SubjectId,
    FacultyId,
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    AverageRating,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CompletedSubjects {
    #[sea_orm(iden = "completed_subjects")]
    Table,
    Id,
    StudentId,
    SubjectId,
    CompletedAt,
}

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    /// 课程编码，全局唯一
    pub code: String,
    pub name: String,
    pub department: String,
    pub semester: i32,
    pub credits: i32,
    pub faculty_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Subject {
    /// 课程列表的展示顺序：院系、学期、名称，均升序。
    /// 存储层查询与服务层过滤后的重排都依赖同一份比较规则。
    pub fn display_order(a: &Subject, b: &Subject) -> Ordering {
        a.department
            .cmp(&b.department)
            .then_with(|| a.semester.cmp(&b.semester))
            .then_with(|| a.name.cmp(&b.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(id: i64, department: &str, semester: i32, name: &str) -> Subject {
        Subject {
            id,
            code: format!("C{id}"),
            name: name.to_string(),
            department: department.to_string(),
            semester,
            credits: 3,
            faculty_id: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_display_order_department_then_semester_then_name() {
        let mut subjects = vec![
            subject(1, "EEE", 1, "Circuits"),
            subject(2, "CSE", 3, "Databases"),
            subject(3, "CSE", 1, "Programming"),
            subject(4, "CSE", 1, "Discrete Math"),
        ];
        subjects.sort_by(Subject::display_order);

        let order: Vec<i64> = subjects.iter().map(|s| s.id).collect();
        // CSE 在 EEE 之前；CSE 内学期1在学期3之前；同学期按名称字典序
        assert_eq!(order, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_display_order_is_stable_under_filtering() {
        let subjects = vec![
            subject(1, "CSE", 1, "Algorithms"),
            subject(2, "CSE", 2, "Networks"),
            subject(3, "EEE", 1, "Signals"),
        ];
        let filtered: Vec<&Subject> = subjects.iter().filter(|s| s.id != 2).collect();
        assert!(
            filtered
                .windows(2)
                .all(|w| Subject::display_order(w[0], w[1]) != Ordering::Greater)
        );
    }
}

//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PortalError {
            $($variant(String),)*
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Conflict("E008", "Conflict Error"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
}

impl PortalError {
    /// 判断存储层错误是否由唯一约束冲突引起
    ///
    /// 各数据库后端的报错文案不同，这里统一归一判定：
    /// SQLite 报 "UNIQUE constraint failed"，PostgreSQL 报
    /// "duplicate key value"，MySQL 报 "Duplicate entry"。
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, PortalError::DatabaseOperation(_))
            && (self.message().contains("UNIQUE constraint failed")
                || self.message().contains("duplicate key value")
                || self.message().contains("Duplicate entry"))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PortalError {
    fn from(err: sea_orm::DbErr) -> Self {
        PortalError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::DatabaseConfig(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(err: chrono::ParseError) -> Self {
        PortalError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortalError::cache_connection("test").code(), "E001");
        assert_eq!(PortalError::database_config("test").code(), "E003");
        assert_eq!(PortalError::validation("test").code(), "E006");
        assert_eq!(PortalError::conflict("test").code(), "E008");
        assert_eq!(PortalError::authentication("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PortalError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            PortalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = PortalError::validation("Invalid rating for q3");
        assert_eq!(err.message(), "Invalid rating for q3");
    }

    #[test]
    fn test_unique_violation_detection() {
        let sqlite = PortalError::database_operation(
            "创建反馈失败: UNIQUE constraint failed: feedbacks.student_id, feedbacks.subject_id",
        );
        assert!(sqlite.is_unique_violation());

        let postgres = PortalError::database_operation(
            "duplicate key value violates unique constraint \"uniq_feedbacks_student_subject\"",
        );
        assert!(postgres.is_unique_violation());

        let other = PortalError::database_operation("connection reset");
        assert!(!other.is_unique_violation());

        // 非存储层错误不参与唯一冲突判定
        let validation = PortalError::validation("UNIQUE constraint failed");
        assert!(!validation.is_unique_violation());
    }

    #[test]
    fn test_format_simple() {
        let err = PortalError::conflict("Feedback already submitted");
        let formatted = err.format_simple();
        assert!(formatted.contains("Conflict Error"));
        assert!(formatted.contains("Feedback already submitted"));
    }
}

use serde::{Deserialize, Serialize};

use crate::models::admins::entities::Admin;
use crate::models::students::entities::Student;

// 登录主体角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student, // 学生
    Admin,   // 管理员
}

impl Role {
    pub const STUDENT: &'static str = "student";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static Role] {
        &[&Self::Admin]
    }
    pub fn student_roles() -> &'static [&'static Role] {
        &[&Self::Student]
    }
    pub fn all_roles() -> &'static [&'static Role] {
        &[&Self::Student, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Role::STUDENT => Ok(Role::Student),
            Role::ADMIN => Ok(Role::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的角色: '{s}'. 支持的角色: student, admin"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "{}", Role::STUDENT),
            Role::Admin => write!(f, "{}", Role::ADMIN),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

// 已认证身份，由 JWT 中间件写入请求扩展，可序列化以便缓存
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthIdentity {
    Student(Student),
    Admin(Admin),
}

impl AuthIdentity {
    pub fn id(&self) -> i64 {
        match self {
            AuthIdentity::Student(s) => s.id,
            AuthIdentity::Admin(a) => a.id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            AuthIdentity::Student(_) => Role::Student,
            AuthIdentity::Admin(_) => Role::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str("student").unwrap(), Role::Student);
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::Student.to_string(), "student");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!(Role::from_str("teacher").is_err());
        let parsed: Result<Role, _> = serde_json::from_str("\"root\"");
        assert!(parsed.is_err());
    }
}

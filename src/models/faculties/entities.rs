use serde::{Deserialize, Serialize};

// 教师职称
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    Professor,          // 教授
    AssociateProfessor, // 副教授
    AssistantProfessor, // 助理教授
    Lecturer,           // 讲师
    Other,              // 其他
}

impl Designation {
    pub const PROFESSOR: &'static str = "professor";
    pub const ASSOCIATE_PROFESSOR: &'static str = "associate_professor";
    pub const ASSISTANT_PROFESSOR: &'static str = "assistant_professor";
    pub const LECTURER: &'static str = "lecturer";
    pub const OTHER: &'static str = "other";
}

impl<'de> Deserialize<'de> for Designation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Designation::PROFESSOR => Ok(Designation::Professor),
            Designation::ASSOCIATE_PROFESSOR => Ok(Designation::AssociateProfessor),
            Designation::ASSISTANT_PROFESSOR => Ok(Designation::AssistantProfessor),
            Designation::LECTURER => Ok(Designation::Lecturer),
            Designation::OTHER => Ok(Designation::Other),
            _ => Err(serde::de::Error::custom(format!(
                "无效的职称: '{s}'. 支持的职称: professor, associate_professor, assistant_professor, lecturer, other"
            ))),
        }
    }
}

impl std::fmt::Display for Designation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Designation::Professor => write!(f, "{}", Designation::PROFESSOR),
            Designation::AssociateProfessor => write!(f, "{}", Designation::ASSOCIATE_PROFESSOR),
            Designation::AssistantProfessor => write!(f, "{}", Designation::ASSISTANT_PROFESSOR),
            Designation::Lecturer => write!(f, "{}", Designation::LECTURER),
            Designation::Other => write!(f, "{}", Designation::OTHER),
        }
    }
}

impl std::str::FromStr for Designation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professor" => Ok(Designation::Professor),
            "associate_professor" => Ok(Designation::AssociateProfessor),
            "assistant_professor" => Ok(Designation::AssistantProfessor),
            "lecturer" => Ok(Designation::Lecturer),
            "other" => Ok(Designation::Other),
            _ => Err(format!("Invalid designation: {s}")),
        }
    }
}

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub designation: Designation,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_designation_round_trip() {
        for s in [
            "professor",
            "associate_professor",
            "assistant_professor",
            "lecturer",
            "other",
        ] {
            let parsed = Designation::from_str(s).unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_designation_rejects_unknown() {
        assert!(Designation::from_str("dean").is_err());
        let parsed: Result<Designation, _> = serde_json::from_str("\"dean\"");
        assert!(parsed.is_err());
    }
}

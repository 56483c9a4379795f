use serde::{Deserialize, Serialize};

/// 五项评分，每项取值 1..=5
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ratings {
    pub q1: i32,
    pub q2: i32,
    pub q3: i32,
    pub q4: i32,
    pub q5: i32,
}

impl Ratings {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    /// 逐项校验，返回第一个越界项的字段名
    pub fn validate(&self) -> Result<(), &'static str> {
        for (key, value) in self.entries() {
            if !(Self::MIN..=Self::MAX).contains(&value) {
                return Err(key);
            }
        }
        Ok(())
    }

    /// 五项均值，保留两位小数。
    /// 五个整数之和乘以 20 正好是均值的百分位数，无舍入误差。
    pub fn average(&self) -> f64 {
        let sum = self.q1 + self.q2 + self.q3 + self.q4 + self.q5;
        f64::from(sum * 20) / 100.0
    }

    pub fn entries(&self) -> [(&'static str, i32); 5] {
        [
            ("q1", self.q1),
            ("q2", self.q2),
            ("q3", self.q3),
            ("q4", self.q4),
            ("q5", self.q5),
        ]
    }
}

// 反馈记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    /// 提交时刻课程所属教师的快照
    pub faculty_id: i64,
    pub ratings: Ratings,
    pub average_rating: f64,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_mixed_ratings() {
        let r = Ratings { q1: 5, q2: 4, q3: 3, q4: 2, q5: 1 };
        assert_eq!(r.average(), 3.00);
    }

    #[test]
    fn test_average_two_decimals() {
        let r = Ratings { q1: 1, q2: 1, q3: 1, q4: 1, q5: 2 };
        assert_eq!(r.average(), 1.20);
        let r = Ratings { q1: 4, q2: 4, q3: 4, q4: 4, q5: 5 };
        assert_eq!(r.average(), 4.20);
        let r = Ratings { q1: 5, q2: 5, q3: 5, q4: 4, q5: 5 };
        assert_eq!(r.average(), 4.80);
    }

    #[test]
    fn test_validate_names_offending_key() {
        let r = Ratings { q1: 3, q2: 3, q3: 0, q4: 3, q5: 3 };
        assert_eq!(r.validate(), Err("q3"));
        let r = Ratings { q1: 3, q2: 3, q3: 3, q4: 3, q5: 6 };
        assert_eq!(r.validate(), Err("q5"));
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let r = Ratings { q1: 1, q2: 5, q3: 1, q4: 5, q5: 3 };
        assert!(r.validate().is_ok());
    }
}

//! 账本快照上的纯聚合函数，不触碰存储。

use std::collections::HashMap;

use crate::models::analytics::responses::{
    DepartmentStat, DistributionBucket, FacultyStat, OverallStatsResponse, QuestionAverages,
};
use crate::models::faculties::entities::Faculty;
use crate::models::feedbacks::entities::Feedback;
use crate::models::subjects::entities::Subject;

/// 分布区间下界的取值范围，[k, k+1) 左闭右开，满分 5.0 落在最后一档 [5, 6)
const BUCKET_MIN: i32 = 1;
const BUCKET_MAX: i32 = 5;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 单条反馈的评分总和，整数域内比较均分时避免浮点误差
fn rating_sum(feedback: &Feedback) -> i64 {
    let r = &feedback.ratings;
    i64::from(r.q1 + r.q2 + r.q3 + r.q4 + r.q5)
}

fn bucket_of(sum: i64) -> i32 {
    // 均分 = sum / 5.0，下界取整即 sum 整除 5；sum 最大 25 对应档位 5
    (sum / 5) as i32
}

/// 全局统计。空集返回 None，调用方负责表达“暂无数据”。
pub fn compute_overall_stats(feedbacks: &[Feedback]) -> Option<OverallStatsResponse> {
    if feedbacks.is_empty() {
        return None;
    }

    let count = feedbacks.len() as i64;
    let mut question_sums = [0i64; 5];
    let mut total_sum = 0i64;
    let mut bucket_counts: HashMap<i32, i64> = HashMap::new();

    for feedback in feedbacks {
        for (index, (_, value)) in feedback.ratings.entries().iter().enumerate() {
            question_sums[index] += i64::from(*value);
        }
        let sum = rating_sum(feedback);
        total_sum += sum;
        *bucket_counts.entry(bucket_of(sum)).or_insert(0) += 1;
    }

    let per_question = |index: usize| round2(question_sums[index] as f64 / count as f64);
    let distribution = (BUCKET_MIN..=BUCKET_MAX)
        .map(|bucket| DistributionBucket {
            bucket,
            count: bucket_counts.get(&bucket).copied().unwrap_or(0),
        })
        .collect();

    Some(OverallStatsResponse {
        total_feedbacks: count,
        // 每条均分 = 总和 / 5，全局均分在整数总和上一次算出
        overall_average: round2(total_sum as f64 / 5.0 / count as f64),
        question_averages: QuestionAverages {
            q1: per_question(0),
            q2: per_question(1),
            q3: per_question(2),
            q4: per_question(3),
            q5: per_question(4),
        },
        distribution,
    })
}

/// 按课程所属院系汇总，院系名升序
pub fn compute_department_breakdown(
    feedbacks: &[Feedback],
    subjects: &[Subject],
) -> Vec<DepartmentStat> {
    let department_by_subject: HashMap<i64, &str> = subjects
        .iter()
        .map(|subject| (subject.id, subject.department.as_str()))
        .collect();

    // department -> (条数, 评分总和)
    let mut grouped: HashMap<&str, (i64, i64)> = HashMap::new();
    for feedback in feedbacks {
        // 课程被删时账本守卫会先拦下，此处跳过仅防御历史脏数据
        let Some(department) = department_by_subject.get(&feedback.subject_id) else {
            continue;
        };
        let entry = grouped.entry(department).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += rating_sum(feedback);
    }

    let mut items: Vec<DepartmentStat> = grouped
        .into_iter()
        .map(|(department, (count, sum))| DepartmentStat {
            department: department.to_string(),
            feedback_count: count,
            average_rating: round2(sum as f64 / 5.0 / count as f64),
        })
        .collect();
    items.sort_by(|a, b| a.department.cmp(&b.department));
    items
}

/// 按教师汇总并截取前 limit 名。
/// 排序：均分降序，再按条数降序，再按教师ID升序，整数域内比较保证确定性。
pub fn compute_top_faculty(
    feedbacks: &[Feedback],
    faculties: &[Faculty],
    limit: i64,
) -> Vec<FacultyStat> {
    let faculty_by_id: HashMap<i64, &Faculty> = faculties
        .iter()
        .map(|faculty| (faculty.id, faculty))
        .collect();

    // faculty_id -> (条数, 评分总和)
    let mut grouped: HashMap<i64, (i64, i64)> = HashMap::new();
    for feedback in feedbacks {
        let entry = grouped.entry(feedback.faculty_id).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += rating_sum(feedback);
    }

    let mut ranked: Vec<(i64, i64, i64)> = grouped
        .into_iter()
        .map(|(faculty_id, (count, sum))| (faculty_id, count, sum))
        .collect();
    // sum_a/count_a 与 sum_b/count_b 用交叉相乘比较，全程停留在整数域
    ranked.sort_by(|a, b| {
        (b.2 * a.1)
            .cmp(&(a.2 * b.1))
            .then(b.1.cmp(&a.1))
            .then(a.0.cmp(&b.0))
    });

    ranked
        .into_iter()
        .filter_map(|(faculty_id, count, sum)| {
            let faculty = faculty_by_id.get(&faculty_id)?;
            Some(FacultyStat {
                faculty_id,
                faculty_name: faculty.name.clone(),
                department: faculty.department.clone(),
                designation: faculty.designation,
                feedback_count: count,
                average_rating: round2(sum as f64 / 5.0 / count as f64),
            })
        })
        .take(limit.max(0) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::faculties::entities::Designation;
    use crate::models::feedbacks::entities::Ratings;

    fn feedback(id: i64, subject_id: i64, faculty_id: i64, q: [i32; 5]) -> Feedback {
        let ratings = Ratings {
            q1: q[0],
            q2: q[1],
            q3: q[2],
            q4: q[3],
            q5: q[4],
        };
        Feedback {
            id,
            student_id: 1,
            subject_id,
            faculty_id,
            ratings,
            average_rating: ratings.average(),
            comment: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn subject(id: i64, code: &str, department: &str) -> Subject {
        Subject {
            id,
            code: code.to_string(),
            name: format!("Subject {id}"),
            department: department.to_string(),
            semester: 1,
            credits: 3,
            faculty_id: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn faculty(id: i64, name: &str) -> Faculty {
        Faculty {
            id,
            name: name.to_string(),
            department: "CSE".to_string(),
            designation: Designation::Professor,
            email: None,
            phone: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_overall_stats_empty_is_none() {
        assert!(compute_overall_stats(&[]).is_none());
    }

    #[test]
    fn test_overall_stats_averages_and_distribution() {
        let feedbacks = vec![
            feedback(1, 1, 1, [5, 5, 5, 5, 5]), // 5.0 落在 [5, 6)
            feedback(2, 1, 1, [4, 4, 4, 4, 4]), // 4.0
            feedback(3, 2, 1, [1, 1, 1, 1, 2]), // 1.2
            feedback(4, 2, 1, [3, 3, 3, 4, 4]), // 3.4
        ];
        let stats = compute_overall_stats(&feedbacks).unwrap();
        assert_eq!(stats.total_feedbacks, 4);
        assert_eq!(stats.overall_average, 3.4);
        assert_eq!(stats.question_averages.q1, 3.25);
        assert_eq!(stats.question_averages.q5, 3.75);

        let counts: Vec<(i32, i64)> = stats
            .distribution
            .iter()
            .map(|b| (b.bucket, b.count))
            .collect();
        assert_eq!(counts, vec![(1, 1), (2, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_distribution_full_marks_not_merged_into_fourth_bucket() {
        // 4.2 属于 [4, 5)，5.0 属于 [5, 6)，两者必须分档
        let feedbacks = vec![
            feedback(1, 1, 1, [4, 4, 4, 4, 5]),
            feedback(2, 1, 1, [5, 5, 5, 5, 5]),
        ];
        let stats = compute_overall_stats(&feedbacks).unwrap();
        let count_of = |k: i32| {
            stats
                .distribution
                .iter()
                .find(|b| b.bucket == k)
                .map(|b| b.count)
        };
        assert_eq!(count_of(4), Some(1));
        assert_eq!(count_of(5), Some(1));
    }

    #[test]
    fn test_distribution_lower_bound_inclusive() {
        // 3.0 属于 [3, 4) 而不是 [2, 3)
        let feedbacks = vec![feedback(1, 1, 1, [3, 3, 3, 3, 3])];
        let stats = compute_overall_stats(&feedbacks).unwrap();
        let bucket3 = stats.distribution.iter().find(|b| b.bucket == 3).unwrap();
        assert_eq!(bucket3.count, 1);
    }

    #[test]
    fn test_department_breakdown_groups_by_subject_department() {
        let subjects = vec![subject(1, "CS101", "CSE"), subject(2, "EE201", "EEE")];
        let feedbacks = vec![
            feedback(1, 1, 1, [5, 5, 5, 5, 5]),
            feedback(2, 1, 1, [3, 3, 3, 3, 3]),
            feedback(3, 2, 2, [2, 2, 2, 2, 2]),
        ];
        let items = compute_department_breakdown(&feedbacks, &subjects);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].department, "CSE");
        assert_eq!(items[0].feedback_count, 2);
        assert_eq!(items[0].average_rating, 4.0);
        assert_eq!(items[1].department, "EEE");
        assert_eq!(items[1].average_rating, 2.0);
    }

    #[test]
    fn test_top_faculty_tie_break_is_deterministic() {
        let faculties = vec![faculty(1, "A"), faculty(2, "B"), faculty(3, "C")];
        // 教师1和教师2均分相同（4.0），教师2条数更多应排前；教师3均分最高
        let feedbacks = vec![
            feedback(1, 1, 1, [4, 4, 4, 4, 4]),
            feedback(2, 2, 2, [5, 5, 5, 5, 5]),
            feedback(3, 2, 2, [3, 3, 3, 3, 3]),
            feedback(4, 3, 3, [5, 5, 5, 5, 4]),
        ];
        let items = compute_top_faculty(&feedbacks, &faculties, 5);
        let order: Vec<i64> = items.iter().map(|s| s.faculty_id).collect();
        assert_eq!(order, vec![3, 2, 1]);

        // 均分与条数都相同时按教师ID升序
        let feedbacks = vec![
            feedback(1, 1, 2, [4, 4, 4, 4, 4]),
            feedback(2, 1, 1, [4, 4, 4, 4, 4]),
        ];
        let items = compute_top_faculty(&feedbacks, &faculties, 5);
        let order: Vec<i64> = items.iter().map(|s| s.faculty_id).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_top_faculty_truncates_to_limit() {
        let faculties = vec![faculty(1, "A"), faculty(2, "B"), faculty(3, "C")];
        let feedbacks = vec![
            feedback(1, 1, 1, [5, 5, 5, 5, 5]),
            feedback(2, 2, 2, [4, 4, 4, 4, 4]),
            feedback(3, 3, 3, [3, 3, 3, 3, 3]),
        ];
        let items = compute_top_faculty(&feedbacks, &faculties, 2);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].faculty_id, 1);
    }
}

// Keyword gap analysis — what the job asks for that the resume never says.
//
// The output order is sorted lexicographically before truncation. Set
// iteration order is not stable across runs, and a report that lists
// different keywords each time it is generated cannot be tested or
// trusted.

use crate::text::keywords::KeywordSet;

/// Compute the missing keywords: `job − resume`, sorted, capped.
///
/// Returns an empty vec when there is no gap.
pub fn missing_keywords(
    resume_keywords: &KeywordSet,
    job_keywords: &KeywordSet,
    cap: usize,
) -> Vec<String> {
    let mut missing: Vec<String> = job_keywords
        .difference(resume_keywords)
        .cloned()
        .collect();
    missing.sort();
    missing.truncate(cap);
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::keywords::extract_keywords;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_difference_excludes_covered_keywords() {
        let resume = set(&["python", "sql"]);
        let job = set(&["python", "sql", "aws"]);
        assert_eq!(missing_keywords(&resume, &job, 10), vec!["aws"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let resume = set(&[]);
        let job = set(&["zookeeper", "airflow", "kafka"]);
        assert_eq!(
            missing_keywords(&resume, &job, 10),
            vec!["airflow", "kafka", "zookeeper"]
        );
    }

    #[test]
    fn test_cap_truncates_after_sorting() {
        let resume = set(&[]);
        let job = set(&["d", "b", "c", "a"]);
        assert_eq!(missing_keywords(&resume, &job, 2), vec!["a", "b"]);
    }

    #[test]
    fn test_no_gap_is_empty_not_error() {
        let resume = set(&["rust", "sql"]);
        let job = set(&["rust"]);
        assert!(missing_keywords(&resume, &job, 10).is_empty());
    }

    #[test]
    fn test_result_subset_of_job_and_disjoint_from_resume() {
        let resume = extract_keywords("I know Python and SQL");
        let job = extract_keywords("Looking for Python, SQL, and AWS experience");
        let missing = missing_keywords(&resume, &job, 10);

        assert!(missing.contains(&"aws".to_string()));
        for keyword in &missing {
            assert!(job.contains(keyword), "{keyword:?} not in job keywords");
            assert!(!resume.contains(keyword), "{keyword:?} already in resume");
        }
    }
}

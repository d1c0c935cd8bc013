use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::{Error, Result};

/// One job record in the corpus.
///
/// Immutable after corpus load. `corpus_pos` is the posting's stable
/// position in load order; ranking uses it as the tie-break order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Posting {
    /// Stable position in the corpus, assigned at load.
    pub corpus_pos: usize,
    pub job_role: String,
    /// Raw required-skills string, case-folded.
    pub skills_raw: String,
    /// Normalized comma-split skill tokens, posting order, empties dropped.
    pub required_skills: Vec<String>,
    // Passthrough attributes, carried opaquely.
    pub company: Option<String>,
    pub domain: Option<String>,
    pub min_experience: Option<String>,
    pub avg_salary: Option<String>,
}

impl Posting {
    /// Create a posting from a raw comma-separated skill string.
    #[must_use]
    pub fn new(corpus_pos: usize, job_role: impl Into<String>, skills_raw: &str) -> Self {
        Self {
            corpus_pos,
            job_role: job_role.into(),
            skills_raw: skills_raw.trim().to_lowercase(),
            required_skills: split_skills(skills_raw),
            company: None,
            domain: None,
            min_experience: None,
            avg_salary: None,
        }
    }

    /// Deduplicated normalized required-skill set.
    #[must_use]
    pub fn required_set(&self) -> AHashSet<&str> {
        self.required_skills.iter().map(String::as_str).collect()
    }
}

/// Normalize one skill token: trim whitespace, case-fold.
#[inline]
#[must_use]
pub fn normalize_skill(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Split a raw comma-separated skill string into normalized tokens.
/// Empty tokens are dropped; order and duplicates are kept.
#[must_use]
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_skill)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Load postings from a tabular CSV dataset.
///
/// Required columns: `job_role`, `required_skills`. Optional columns
/// `company`, `domain`, `min_experience`, `avg_salary` are passed through
/// opaquely. Rows with an empty role or skill string are skipped with a
/// warning rather than failing the whole load.
pub fn load_postings(path: &Path) -> Result<Vec<Posting>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    let role_col = position("job_role").ok_or(Error::MissingColumn("job_role"))?;
    let skills_col = position("required_skills").ok_or(Error::MissingColumn("required_skills"))?;
    let company_col = position("company");
    let domain_col = position("domain");
    let experience_col = position("min_experience");
    let salary_col = position("avg_salary");

    let mut postings = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let job_role = record.get(role_col).unwrap_or("").trim();
        let skills_raw = record.get(skills_col).unwrap_or("").trim();
        if job_role.is_empty() || skills_raw.is_empty() {
            warn!(row, "skipping row with empty job_role or required_skills");
            continue;
        }

        let mut posting = Posting::new(postings.len(), job_role, skills_raw);
        posting.company = opt_field(&record, company_col);
        posting.domain = opt_field(&record, domain_col);
        posting.min_experience = opt_field(&record, experience_col);
        posting.avg_salary = opt_field(&record, salary_col);
        postings.push(posting);
    }

    Ok(postings)
}

fn opt_field(record: &csv::StringRecord, col: Option<usize>) -> Option<String> {
    col.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_skills_normalizes() {
        let skills = split_skills(" Python , SQL,, Machine Learning ");
        assert_eq!(skills, vec!["python", "sql", "machine learning"]);
    }

    #[test]
    fn test_required_set_dedupes() {
        let posting = Posting::new(0, "Analyst", "sql, sql, python");
        assert_eq!(posting.required_skills.len(), 3);
        assert_eq!(posting.required_set().len(), 2);
    }

    #[test]
    fn test_load_postings_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "job_role,required_skills,company").unwrap();
        writeln!(file, "Data Analyst,\"python, sql, excel\",Acme").unwrap();
        writeln!(file, "Backend Developer,\"java, sql, spring\",").unwrap();
        file.flush().unwrap();

        let postings = load_postings(file.path()).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].corpus_pos, 0);
        assert_eq!(postings[0].job_role, "Data Analyst");
        assert_eq!(postings[0].required_skills, vec!["python", "sql", "excel"]);
        assert_eq!(postings[0].company.as_deref(), Some("Acme"));
        assert_eq!(postings[1].company, None);
    }

    #[test]
    fn test_load_postings_missing_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "job_role,salary").unwrap();
        writeln!(file, "Analyst,100").unwrap();
        file.flush().unwrap();

        let err = load_postings(file.path()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn("required_skills")));
    }

    #[test]
    fn test_load_postings_skips_empty_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "job_role,required_skills").unwrap();
        writeln!(file, "Analyst,\"python, sql\"").unwrap();
        writeln!(file, ",\"go, rust\"").unwrap();
        writeln!(file, "Engineer,").unwrap();
        file.flush().unwrap();

        let postings = load_postings(file.path()).unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].job_role, "Analyst");
    }
}

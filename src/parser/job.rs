//! Job file parser.
//!
//! A job file is a JSON [`JobRequest`]:
//!
//! ```json
//! {
//!   "name": "Birch ply",
//!   "date": "2024-05-01",
//!   "main": { "width": 244, "height": 122 },
//!   "cut": { "width": 60, "height": 40 },
//!   "costs": { "quantity": 2, "cost_per_area": 18.5, "additional_cost": 25, "discard_percent": 5 }
//! }
//! ```

use crate::error::{CalcError, Result};
use crate::model::JobRequest;
use std::path::Path;

/// Parse a job request from JSON text.
pub fn parse_job_str(content: &str) -> Result<JobRequest> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a job file.
pub fn parse_job_file(path: &Path) -> Result<JobRequest> {
    if !path.exists() {
        return Err(CalcError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CalcError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    serde_json::from_str(&content).map_err(|source| CalcError::InvalidFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CostInputs, CutSpec, PanelSpec};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const FULL_JOB: &str = r#"{
        "name": "Birch ply",
        "date": "2024-05-01",
        "main": { "width": 244, "height": 122 },
        "cut": { "width": 60, "height": 40 },
        "costs": { "quantity": 2, "cost_per_area": 18.5, "additional_cost": 25, "discard_percent": 5 },
        "cutting_waste_percent": 7.5
    }"#;

    #[test]
    fn test_parse_full_job() {
        let job = parse_job_str(FULL_JOB).unwrap();
        let expected = JobRequest::new(
            "Birch ply",
            PanelSpec::new(244.0, 122.0),
            CutSpec::new(60.0, 40.0),
        )
        .with_date("2024-05-01")
        .with_costs(CostInputs {
            quantity: 2,
            cost_per_area: 18.5,
            additional_cost: 25.0,
            discard_percent: 5.0,
        })
        .with_cutting_waste(7.5);
        assert_eq!(job, expected);
    }

    #[test]
    fn test_parse_minimal_job_uses_defaults() {
        let job = parse_job_str(
            r#"{"main": {"width": 100, "height": 100}, "cut": {"width": 30, "height": 30}}"#,
        )
        .unwrap();
        assert_eq!(job.name, "");
        assert_eq!(job.costs, CostInputs::default());
        assert_eq!(job.cutting_waste_percent, None);
    }

    #[test]
    fn test_parse_missing_geometry() {
        assert!(parse_job_str(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_parse_job_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_JOB.as_bytes()).unwrap();
        let job = parse_job_file(file.path()).unwrap();
        assert_eq!(job.name, "Birch ply");
    }

    #[test]
    fn test_parse_job_file_errors() {
        let result = parse_job_file(Path::new("/nonexistent/job.json"));
        assert!(matches!(result, Err(CalcError::FileNotFound { .. })));

        let empty = tempfile::NamedTempFile::new().unwrap();
        let result = parse_job_file(empty.path());
        assert!(matches!(result, Err(CalcError::EmptyFile { .. })));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(b"[1, 2").unwrap();
        let result = parse_job_file(bad.path());
        assert!(matches!(result, Err(CalcError::InvalidFile { .. })));
    }
}

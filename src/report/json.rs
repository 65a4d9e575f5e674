use std::error::Error;

use super::CombinedReport;
use crate::report_helpers;

pub fn print_json(report: &CombinedReport) -> Result<(), Box<dyn Error>> {
    report_helpers::print_json_stdout(report)
}

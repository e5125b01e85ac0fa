//! CSV output formatting for violation reports.

use super::Report;
use std::error::Error;
use std::io::Write;

/// Quote a field if it contains a comma, quote or newline.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') || input.contains('\n') {
        // excel does not like spaces after comma between fields, so none are added
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// Write the report as CSV. A clean report is a header-only file.
pub fn write_csv<W: Write>(out: &mut W, report: &Report) -> Result<(), Box<dyn Error>> {
    log::info!("Writing {} violation row(s) as CSV", report.rows().len());
    writeln!(out, "vrf,subnet,role,interfaces")?;
    for row in report.rows() {
        writeln!(
            out,
            "{vrf},{subnet},{role},{interfaces}",
            vrf = escape_csv_field(&row.vrf),
            subnet = escape_csv_field(&row.subnet),
            role = escape_csv_field(&row.role),
            interfaces = escape_csv_field(&row.interfaces_joined(";")),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ReportRow;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("core"), "core");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_csv() {
        let report = Report::Violations(vec![ReportRow {
            vrf: "cust,a".to_string(),
            subnet: "10.0.0.1".to_string(),
            role: "fhrp".to_string(),
            interfaces: vec!["C:Vlan10".to_string(), "B:Vlan10".to_string(), "A:Vlan10".to_string()],
        }]);
        let mut buf = Vec::new();
        write_csv(&mut buf, &report).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "vrf,subnet,role,interfaces\n\"cust,a\",10.0.0.1,fhrp,C:Vlan10;B:Vlan10;A:Vlan10\n"
        );
    }

    #[test]
    fn test_write_csv_clean() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &Report::Clean).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "vrf,subnet,role,interfaces\n");
    }
}

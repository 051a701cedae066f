//! Exports the customer EULA-infringement report by following the listing
//! endpoint's cursor and serializing the accumulated rows as CSV.

use crate::domain::models::InfringementPage;
use crate::errors::CliError;
use crate::services::api::ApiClient;
use reqwest::Method;
use std::io::Write;

const CSV_HEADER: [&str; 10] = [
    "elsCustomerID",
    "vendorCustomerID",
    "eulaPeriod",
    "year",
    "month",
    "eulaPolicyID",
    "featureID",
    "licenseSetID",
    "licenseIndex",
    "numUsers",
];

fn report_path(vendor_id: &str, year: i32, month: u32) -> String {
    format!(
        "/vendors/{}/customerLicenceEulaInfringements/month/{}/{}",
        vendor_id, year, month
    )
}

fn page_path(path: &str, cursor: &str) -> String {
    if cursor.is_empty() {
        path.to_string()
    } else {
        format!("{}?cursor={}", path, cursor)
    }
}

/// Appends one CSV row per infringement, preserving customer order and
/// infringement order within the page.
fn append_rows(page: &InfringementPage, rows: &mut Vec<Vec<String>>) {
    for ci in &page.customer_infringements {
        for i in &ci.infringements {
            rows.push(vec![
                ci.els_customer_id.clone(),
                ci.vendor_customer_id.clone(),
                i.eula_period.clone(),
                i.year.to_string(),
                i.month.to_string(),
                i.eula_policy_id.clone(),
                i.feature_id.clone(),
                i.licence_set_id.clone(),
                i.licence_index.to_string(),
                i.num_users.to_string(),
            ]);
        }
    }
}

/// Writes the complete report as one CSV document. The header row is always
/// present, even when there are no data rows.
fn write_csv(out: &mut impl Write, rows: &[Vec<String>]) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(CSV_HEADER)?;
    for row in rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Fetches every page of the infringement report for the vendor's given
/// month, then writes the flattened rows as CSV. Every page must return
/// HTTP 200; anything else aborts before any CSV is written.
pub fn export_infringements(
    client: &ApiClient,
    out: &mut impl Write,
    vendor_id: &str,
    year: i32,
    month: u32,
) -> anyhow::Result<()> {
    let path = report_path(vendor_id, year, month);
    let mut rows = Vec::new();
    let mut cursor = String::new();

    loop {
        let rep = client.execute(Method::GET, &page_path(&path, &cursor), None)?;
        if rep.status != 200 {
            return Err(CliError::UnexpectedResponse(rep.status).into());
        }
        let page: InfringementPage = serde_json::from_slice(&rep.body)?;
        append_rows(&page, &mut rows);
        cursor = page.cursor;
        if cursor.is_empty() {
            break;
        }
    }

    write_csv(out, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json: &str) -> InfringementPage {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn zero_rows_still_produces_the_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "elsCustomerID,vendorCustomerID,eulaPeriod,year,month,eulaPolicyID,featureID,licenseSetID,licenseIndex,numUsers\n"
        );
    }

    #[test]
    fn rows_flatten_in_customer_then_infringement_order() {
        let p = page(
            r#"{
                "cursor": "c1",
                "customerInfringements": [
                    {"elsCustomerId": "A", "vendorCustomerId": "VA", "infringements": [
                        {"eulaPeriod": "month", "year": 2018, "month": 7, "eulaPolicyId": "P1",
                         "featureId": "F1", "licenceSetId": "L1", "licenceIndex": 2, "numUsers": 5},
                        {"eulaPeriod": "month", "year": 2018, "month": 7, "eulaPolicyId": "P2",
                         "featureId": "F2", "licenceSetId": "L2", "licenceIndex": 1, "numUsers": 3}
                    ]},
                    {"elsCustomerId": "B", "vendorCustomerId": "VB", "infringements": [
                        {"eulaPeriod": "month", "year": 2018, "month": 7, "eulaPolicyId": "P3",
                         "featureId": "F3", "licenceSetId": "L3", "licenceIndex": 0, "numUsers": 1}
                    ]}
                ]
            }"#,
        );
        let mut rows = Vec::new();
        append_rows(&p, &mut rows);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "A");
        assert_eq!(rows[0][5], "P1");
        assert_eq!(rows[1][5], "P2");
        assert_eq!(rows[2][0], "B");

        let mut out = Vec::new();
        write_csv(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "A,VA,month,2018,7,P1,F1,L1,2,5");
        assert_eq!(lines[3], "B,VB,month,2018,7,P3,F3,L3,0,1");
    }

    #[test]
    fn page_path_appends_the_cursor_when_present() {
        assert_eq!(page_path("/p", ""), "/p");
        assert_eq!(page_path("/p", "c1"), "/p?cursor=c1");
    }

    #[test]
    fn report_path_embeds_vendor_and_period() {
        assert_eq!(
            report_path("aVendor", 2018, 7),
            "/vendors/aVendor/customerLicenceEulaInfringements/month/2018/7"
        );
    }
}

use chrono::Utc;
use itertools::Itertools;

use super::company::CompanyData;

pub const CSV_HEADERS: [&str; 8] = [
    "Company Name",
    "Website",
    "Email",
    "Phone",
    "Industry",
    "Location",
    "Founded",
    "Description",
];

pub fn export_file_name(extension: &str) -> String {
    format!("company-data-{}.{}", Utc::now().format("%Y-%m-%d"), extension)
}

/// Renders the result list as CSV. Every field is quoted, embedded quotes
/// are doubled.
pub fn results_to_csv(results: &[CompanyData]) -> String {
    let header = CSV_HEADERS.iter().join(",");

    let rows = results.iter().map(|company| {
        [
            company.company_name.as_str(),
            company.website_url.as_str(),
            company.email.as_deref().unwrap_or(""),
            company.phone.as_deref().unwrap_or(""),
            company.industry.as_deref().unwrap_or(""),
            company.location.as_deref().unwrap_or(""),
            company.founded_year.as_deref().unwrap_or(""),
            company.description.as_deref().unwrap_or(""),
        ]
        .iter()
        .map(|field| quote(field))
        .join(",")
    });

    std::iter::once(header).chain(rows).join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{results_to_csv, CSV_HEADERS};
    use crate::domain::company::{CompanyData, SocialMedia, EXTRACTION_CONFIDENCE};

    fn sample_company() -> CompanyData {
        CompanyData {
            id: "company-7f9c1b2a".to_string(),
            company_name: "Stripe".to_string(),
            website_url: "https://stripe.com".to_string(),
            email: Some("contact@stripe.com".to_string()),
            phone: Some("+1-888-963-8477".to_string()),
            description: Some("Online payment processing".to_string()),
            industry: Some("Technology".to_string()),
            location: Some(String::new()),
            founded_year: Some(String::new()),
            social_media: Some(SocialMedia {
                linkedin: Some("https://linkedin.com/company/stripe".to_string()),
                twitter: Some(String::new()),
                facebook: None,
            }),
            tech_stack: None,
            employee_size: Some(String::new()),
            extracted_at: Utc::now(),
            source_url: "https://stripe.com".to_string(),
            confidence: EXTRACTION_CONFIDENCE,
        }
    }

    #[test]
    fn csv_starts_with_header_row() {
        let csv = results_to_csv(&[sample_company()]);
        let header = csv.lines().next().unwrap();

        assert_eq!(header, CSV_HEADERS.join(","));
    }

    #[test]
    fn csv_quotes_every_field() {
        let csv = results_to_csv(&[sample_company()]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            r#""Stripe","https://stripe.com","contact@stripe.com","+1-888-963-8477","Technology","","","Online payment processing""#
        );
    }

    #[test]
    fn embedded_quotes_in_description_are_doubled() {
        let mut company = sample_company();
        company.description = Some(r#"The "programmable" payments company"#.to_string());
        let csv = results_to_csv(&[company]);
        let row = csv.lines().nth(1).unwrap();

        assert!(row.ends_with(r#""The ""programmable"" payments company""#));
    }

    #[test]
    fn missing_optional_fields_export_as_empty_strings() {
        let mut company = sample_company();
        company.email = None;
        company.phone = None;
        company.description = None;
        let csv = results_to_csv(&[company]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            r#""Stripe","https://stripe.com","","","Technology","","","""#
        );
    }

    #[test]
    fn empty_result_list_exports_only_headers() {
        let csv = results_to_csv(&[]);

        assert_eq!(csv, CSV_HEADERS.join(","));
    }
}

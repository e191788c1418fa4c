#[cfg(test)]
mod tests {
    use crate::error::GridError;
    use crate::models::{PropertyId, RateStatus};
    use crate::parsing::comparison_json::{parse_comparison_json, parse_comparison_json_str};
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    const PAYLOAD: &str = r#"{
        "dateRange": { "start": "2024-01-01", "end": "2024-01-07" },
        "selectedProperties": ["h-1"],
        "comparisonData": [
            {
                "property": {
                    "id": "h-1",
                    "name": "Harbour View",
                    "competitiveness": 0.82,
                    "availability": 0.64,
                    "parityScore": 0.97
                },
                "rateSeries": [
                    {
                        "date": "2024-01-01",
                        "status": "Open",
                        "rate": 1189.0,
                        "minRate": 1100,
                        "maxRate": "1250",
                        "channelName": "Brand.com",
                        "roomProductName": "Standard King",
                        "compsetAverage": 1210.5,
                        "eventList": [{ "name": "Boat Show" }]
                    },
                    { "date": "2024-01-02", "status": "Closed", "rate": 0 },
                    { "date": "2024-01-03T00:00:00Z", "status": "NoData" }
                ],
                "lowestDesignation": ["2024-01-01"],
                "highestDesignation": []
            },
            {
                "property": { "id": 42, "name": "Quayside Inn" },
                "rateSeries": [
                    { "date": "2024-01-01", "status": "Open", "rate": 1400 }
                ],
                "highestDesignation": ["2024-01-01"]
            }
        ]
    }"#;

    #[test]
    fn test_parse_full_payload() {
        let payload = parse_comparison_json_str(PAYLOAD).unwrap();

        assert_eq!(payload.start, Some(date(1)));
        assert_eq!(payload.end, Some(date(7)));
        assert_eq!(payload.selected_properties, vec!["h-1".to_string()]);
        assert_eq!(payload.comparison.len(), 2);

        let first = &payload.comparison.entries()[0];
        assert_eq!(first.property.name, "Harbour View");
        assert_eq!(first.property.parity_score, Some(0.97));
        assert_eq!(first.rate_series.len(), 3);

        let open = first.rate_series.get(date(1)).unwrap();
        assert_eq!(open.status, RateStatus::Open);
        assert_eq!(open.band(), (1100.0, 1250.0));
        assert_eq!(open.channel_name, "Brand.com");
        assert_eq!(open.compset_average, Some(1210.5));
        assert_eq!(open.events[0].name, "Boat Show");

        assert_eq!(first.rate_series.get(date(2)).unwrap().status, RateStatus::Closed);
        assert_eq!(first.rate_series.get(date(3)).unwrap().status, RateStatus::NoData);
    }

    #[test]
    fn test_integer_property_id() {
        let payload = parse_comparison_json_str(PAYLOAD).unwrap();
        let second = &payload.comparison.entries()[1];
        assert_eq!(second.id(), &PropertyId::from("42"));
    }

    #[test]
    fn test_designations_are_read() {
        let payload = parse_comparison_json_str(PAYLOAD).unwrap();
        let designation = payload.comparison.designation(date(1));
        assert!(designation.is_lowest(&PropertyId::from("h-1")));
        assert!(designation.is_highest(&PropertyId::from("42")));
    }

    #[test]
    fn test_malformed_records_degrade_to_no_data() {
        let json = r#"{
            "comparisonData": [{
                "property": { "id": "x" },
                "rateSeries": [
                    { "date": "2024-01-01", "status": "Open", "rate": "abc" },
                    { "date": "2024-01-02", "status": "Mystery", "rate": 100 },
                    { "date": "not-a-date", "status": "Open", "rate": 100 },
                    { "status": "Open", "rate": 100 },
                    42
                ],
                "lowestDesignation": ["garbage", "2024-01-02"]
            }]
        }"#;

        let payload = parse_comparison_json_str(json).unwrap();
        let entry = &payload.comparison.entries()[0];
        assert_eq!(entry.property.name, "x");
        assert_eq!(entry.rate_series.len(), 2);
        assert_eq!(entry.rate_series.get(date(1)).unwrap().status, RateStatus::NoData);
        assert_eq!(entry.rate_series.get(date(2)).unwrap().status, RateStatus::NoData);
        assert_eq!(entry.lowest_dates.len(), 1);
    }

    #[test]
    fn test_missing_date_range_is_allowed() {
        let json = r#"{ "comparisonData": [] }"#;
        let payload = parse_comparison_json_str(json).unwrap();
        assert_eq!(payload.start, None);
        assert_eq!(payload.end, None);
        assert!(payload.comparison.is_empty());
        assert!(payload.selected_properties.is_empty());
    }

    #[test]
    fn test_invalid_date_range_is_an_error() {
        let json = r#"{ "dateRange": { "start": "01/02/2024" }, "comparisonData": [] }"#;
        let err = parse_comparison_json_str(json).unwrap_err();
        assert!(format!("{:#}", err).contains("dateRange.start"));
        let grid_err = err.downcast_ref::<GridError>().unwrap();
        assert!(matches!(grid_err, GridError::Payload { .. }));
        assert!(grid_err.is_input_error());
    }

    #[test]
    fn test_missing_comparison_data_is_an_error() {
        let err = parse_comparison_json_str(r#"{ "dateRange": {} }"#).unwrap_err();
        assert!(err.to_string().contains("comparisonData"));
        assert!(err.downcast_ref::<GridError>().is_some_and(GridError::is_input_error));
        assert!(parse_comparison_json_str("not json").is_err());
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PAYLOAD.as_bytes()).unwrap();

        let payload = parse_comparison_json(file.path()).unwrap();
        assert_eq!(payload.comparison.len(), 2);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = parse_comparison_json(std::path::Path::new("/nonexistent/payload.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/payload.json"));
    }
}

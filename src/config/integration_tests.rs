// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use crate::config::load_and_validate_config;
    use crate::demo::render_refactored;
    use crate::errors::ConfigError;
    use crate::model::ReportType;

    /// The checked-in quarterly config reproduces the default demo
    #[test]
    fn test_quarterly_summary_yaml_loading() {
        let config = load_and_validate_config("configs/quarterly-summary.yaml").unwrap();

        assert_eq!(config.data.len(), 3);
        assert_eq!(config.data[0], "Sales Data: Q1");
        assert_eq!(
            config.report_types(),
            vec![ReportType::Pdf, ReportType::Csv, ReportType::Text]
        );
    }

    /// TOML and YAML versions of the same run are equivalent
    #[test]
    fn test_toml_and_yaml_configs_agree() {
        let yaml = load_and_validate_config("configs/quarterly-summary.yaml").unwrap();
        let toml = load_and_validate_config("configs/quarterly-summary.toml").unwrap();
        assert_eq!(yaml, toml);
    }

    /// Padded items and an unknown report name still render
    #[test]
    fn test_messy_input_yaml_renders() {
        let config = load_and_validate_config("configs/messy-input.yaml").unwrap();
        let processor = config.data_processor();

        let output = render_refactored(&processor, &config.report_types());

        assert_eq!(
            output,
            "CSV Report:\nNET INCOME: $20000,,TAX: $4000\n\n---\n\nTEXT Report:\nNET INCOME: $20000\n\nTAX: $4000\n\n"
        );
    }

    /// Duplicate reports are rejected with every duplicate listed
    #[test]
    fn test_duplicate_reports_yaml_rejected() {
        let err = load_and_validate_config("configs/duplicate-reports.yaml").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("Expected validation error, got {}", other),
        }
    }
}

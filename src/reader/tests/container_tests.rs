//! Tests for reading container inventory records

use super::*;
use crate::config::{ReaderConfig, ValidationPolicy};
use crate::error::ReaderError;
use crate::models::ContainerType;
use crate::reader::{DelimitedRecordReader, read_container_records};

#[test]
fn test_reads_one_record_per_body_line() {
    let (_dir, path) = write_temp_file("contenedores.csv", &create_container_csv());

    let records = read_container_records(&path, ";").unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].site_code, "001");
    assert_eq!(records[1].site_code, "002");
    assert_eq!(records[2].site_code, "003");
}

#[test]
fn test_field_mapping_skips_coordinates() {
    let (_dir, path) = write_temp_file("contenedores.csv", &create_container_csv());

    let records = read_container_records(&path, ";").unwrap();
    let record = &records[0];

    assert_eq!(record.container_type, ContainerType::Organic);
    assert_eq!(record.model, "CL-120");
    assert_eq!(record.model_description, "Contenedor 120 L");
    assert_eq!(record.quantity, 2);
    assert_eq!(record.batch_id, 1);
    assert_eq!(record.district, "CENTRO");
    assert_eq!(record.neighborhood, "SOL");
    assert_eq!(record.street_type, "CALLE");
    assert_eq!(record.street_name, "MAYOR");
    assert_eq!(record.street_number, "12");
    // Field 15, after the four dropped coordinate fields
    assert_eq!(record.address, "CALLE MAYOR 12");
}

#[test]
fn test_empty_field_becomes_placeholder() {
    let (_dir, path) = write_temp_file("contenedores.csv", &create_container_csv());

    let records = read_container_records(&path, ";").unwrap();

    assert_eq!(records[1].street_number, "N/A");
    assert_eq!(records[1].address, "PASEO PRADO S/N");
}

#[test]
fn test_trailing_empty_address_becomes_placeholder() {
    let content = format!(
        "{CONTAINER_HEADER_LINE}\n004;RESTO;CL-800;Carga lateral;1;1;TETUAN;BERRUGUETE;CALLE;LOS NARDOS;3;1;2;3;4;"
    );
    let (_dir, path) = write_temp_file("contenedores.csv", &content);

    let records = read_container_records(&path, ";").unwrap();

    assert_eq!(records[0].container_type, ContainerType::Residual);
    assert_eq!(records[0].address, "N/A");
}

#[test]
fn test_unknown_container_type() {
    let (_dir, path) = write_temp_file("contenedores.csv", &create_container_csv());

    let reader = DelimitedRecordReader::with_delimiter(";").unwrap();
    let result = reader.read_container_records_with_stats(&path).unwrap();

    assert_eq!(result.records[2].container_type, ContainerType::Unknown);
    assert_eq!(result.stats.unrecognized_labels, 1);
}

#[test]
fn test_missing_file_error_names_path() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("contenedores_varios.csv");

    match read_container_records(&missing, ";") {
        Err(ReaderError::FileNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_existence_only_accepts_any_extension_and_empty_file() {
    let (_dir, path) = write_temp_file("contenedores.txt", "");

    let records = read_container_records(&path, ";").unwrap();
    assert!(records.is_empty());

    let (_dir, path) = write_temp_file("contenedores.txt", CONTAINER_HEADER_LINE);
    let records = read_container_records(&path, ";").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_strict_policy_applies_file_checks() {
    let config = ReaderConfig::default().with_container_validation(ValidationPolicy::Strict);
    let reader = DelimitedRecordReader::new(config).unwrap();

    let (_dir, path) = write_temp_file("contenedores.txt", &create_container_csv());
    let error = reader.read_container_records(&path).unwrap_err();
    assert_eq!(error.exit_code(), 1704);

    let (_dir, path) = write_temp_file("contenedores.csv", CONTAINER_HEADER_LINE);
    let error = reader.read_container_records(&path).unwrap_err();
    assert_eq!(error.exit_code(), 1709);

    // The container header itself is never checked
    let (_dir, path) = write_temp_file("contenedores.csv", &create_container_csv());
    assert_eq!(reader.read_container_records(&path).unwrap().len(), 3);
}

#[test]
fn test_splits_on_semicolon_regardless_of_delimiter() {
    // Sanitizing uses ",", so ";;" gaps are left empty but rows still split on ";"
    let (_dir, path) = write_temp_file("contenedores.csv", &create_container_csv());

    let records = read_container_records(&path, ",").unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].address, "CALLE MAYOR 12");
    assert_eq!(records[1].street_number, "");
}

#[test]
fn test_configured_split_delimiter() {
    let content = create_container_csv().replace(';', "|");
    let (_dir, path) = write_temp_file("contenedores.csv", &content);

    let config = ReaderConfig::default()
        .with_delimiter("|")
        .with_container_split_delimiter("|");
    let reader = DelimitedRecordReader::new(config).unwrap();
    let records = reader.read_container_records(&path).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].street_number, "N/A");
}

#[test]
fn test_short_container_row() {
    let content = format!("{CONTAINER_HEADER_LINE}\n005;ENVASES;CL-3200;Carga lateral;1;1;USERA");
    let (_dir, path) = write_temp_file("contenedores.csv", &content);

    let error = read_container_records(&path, ";").unwrap_err();
    match error {
        ReaderError::MalformedRecord { line, reason, .. } => {
            assert_eq!(line, 2);
            assert!(reason.contains("at least 16"));
        }
        other => panic!("Expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_empty_quantity_is_malformed() {
    let content = format!(
        "{CONTAINER_HEADER_LINE}\n006;VIDRIO;IGLU;Iglú;;1;LATINA;LUCERO;CALLE;TORRECILLA;1;1;2;3;4;CALLE TORRECILLA 1"
    );
    let (_dir, path) = write_temp_file("contenedores.csv", &content);

    let error = read_container_records(&path, ";").unwrap_err();
    assert!(error.to_string().contains("invalid quantity 'N/A'"));
}

#[test]
fn test_placeholder_delimiter_is_rejected() {
    let content = create_container_csv().replace(';', "/");
    let (_dir, path) = write_temp_file("contenedores.csv", &content);

    let error = read_container_records(&path, "/").unwrap_err();
    assert!(matches!(error, ReaderError::Configuration { .. }));
    assert!(error.to_string().contains("placeholder"));
}

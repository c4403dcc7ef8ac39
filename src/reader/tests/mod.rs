//! Test utilities for the delimited record reader
//!
//! Fixture builders for waste and container files written into temporary
//! directories.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Test modules
mod container_tests;

/// Header line of a valid waste file
pub const WASTE_HEADER_LINE: &str = "Año;Mes;Lote;Residuo;Distrito;Nombre Distrito;Toneladas";

/// Header line of a container file
pub const CONTAINER_HEADER_LINE: &str = "Código Interno del Situad;Tipo Contenedor;Modelo;Descripcion Modelo;Cantidad;Lote;Distrito;Barrio;Tipo Vía;Nombre;Número;COORDENADA X;COORDENADA Y;LONGITUD;LATITUD;DIRECCION";

/// Helper to create complete waste file content
pub fn create_waste_csv() -> String {
    [
        WASTE_HEADER_LINE,
        "2021;enero;1;RESTO;1;Centro;1534,7",
        "2021;enero;1;ENVASES;1;Centro;250,25",
        "2021;enero;2;VIDRIO COMERCIAL;2;Arganzuela;12,5",
        "2021;febrero;1;FOO;3;Retiro;0,8",
    ]
    .join("\n")
}

/// Helper to create container file content with one empty field per row
pub fn create_container_csv() -> String {
    [
        CONTAINER_HEADER_LINE,
        "001;ORGANICA;CL-120;Contenedor 120 L;2;1;CENTRO;SOL;CALLE;MAYOR;12;440000;4474000;-3,70;40,41;CALLE MAYOR 12",
        "002;VIDRIO;IGLU-3;Iglú 3000 L;1;2;RETIRO;JERONIMOS;PASEO;PRADO;;440100;4474100;-3,69;40,41;PASEO PRADO S/N",
        "003;PILAS;PL-1;Pilas;1;3;CHAMBERI;ALMAGRO;CALLE;FUENCARRAL;88;440200;4474200;-3,70;40,43;CALLE FUENCARRAL 88",
    ]
    .join("\n")
}

/// Helper to write `content` into `name` inside a fresh temporary directory
///
/// The directory is returned so the file lives as long as the test holds it.
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

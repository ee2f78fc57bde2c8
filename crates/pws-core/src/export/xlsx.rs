//! XLSX exporter

use super::exporter::Exporter;
use super::kind::ExportKind;
use crate::error::{PwsError, Result};
use crate::record::Leaf;
use crate::table::Table;
use rust_xlsxwriter::{Color, ColNum, Format, FormatPattern, RowNum, Workbook, Worksheet};

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Data";

/// Light gray header fill
pub const DEFAULT_HEADER_FILL: u32 = 0xD3D3D3;

/// XLSX exporter writing one `Data` worksheet
///
/// Row 1 holds the headers in bold with a solid fill. Numbers and booleans
/// keep their cell types, nulls are left blank.
pub struct XlsxExporter {
    header_fill: u32,
}

impl XlsxExporter {
    pub fn new() -> Self {
        Self {
            header_fill: DEFAULT_HEADER_FILL,
        }
    }

    /// Set the header fill as a 0xRRGGBB value
    pub fn with_header_fill(mut self, rgb: u32) -> Self {
        self.header_fill = rgb;
        self
    }

    fn header_format(&self) -> Format {
        Format::new()
            .set_bold()
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(self.header_fill))
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for XlsxExporter {
    fn serialize(&self, table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header_format = self.header_format();
        for (col, header) in table.headers().iter().enumerate() {
            worksheet.write_string_with_format(0, column(col)?, header, &header_format)?;
        }

        for (i, row) in table.rows().iter().enumerate() {
            let row_num = RowNum::try_from(i + 1)
                .map_err(|_| PwsError::Serialization(format!("row {} out of range", i + 1)))?;
            for (col, cell) in row.iter().enumerate() {
                write_cell(worksheet, row_num, column(col)?, cell)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }

    fn kind(&self) -> ExportKind {
        ExportKind::Xlsx
    }
}

fn column(index: usize) -> Result<ColNum> {
    ColNum::try_from(index)
        .map_err(|_| PwsError::Serialization(format!("column {} out of range", index)))
}

fn write_cell(worksheet: &mut Worksheet, row: RowNum, col: ColNum, cell: &Leaf) -> Result<()> {
    match cell {
        Leaf::Null => {}
        Leaf::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Leaf::Number(n) => {
            let value = n.as_f64().ok_or_else(|| {
                PwsError::Serialization(format!("number {} is not representable", n))
            })?;
            worksheet.write_number(row, col, value)?;
        }
        Leaf::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Leaf::Opaque(v) => {
            worksheet.write_string(row, col, v.to_string())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FlatRecord;
    use crate::table::build_table;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use pretty_assertions::assert_eq;
    use serde_json::Number;
    use std::io::{Cursor, Read};

    fn sample_table() -> Table {
        let flat: Vec<FlatRecord> = vec![
            vec![
                ("stationID", Leaf::Text("KMAHANOV10".into())),
                ("tempAvg", Leaf::Number(Number::from_f64(14.25).unwrap())),
                ("humidity", Leaf::Number(63.into())),
                ("valid", Leaf::Bool(true)),
            ],
            vec![
                ("stationID", Leaf::Text("KMAHANOV10".into())),
                ("tempAvg", Leaf::Number(Number::from_f64(-2.5).unwrap())),
                ("humidity", Leaf::Number(91.into())),
                ("valid", Leaf::Bool(false)),
            ],
        ]
        .into_iter()
        .map(|fields| fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
        .collect();
        build_table(&flat).unwrap()
    }

    fn zip_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    /// Cell elements of the given 1-based row in a worksheet part
    fn row_cells(sheet_xml: &str, row: u32) -> Vec<String> {
        let marker = format!("<row r=\"{}\"", row);
        let start = sheet_xml.find(&marker).expect("row present");
        let end = start + sheet_xml[start..].find("</row>").expect("row closed");
        sheet_xml[start..end]
            .split("<c ")
            .skip(1)
            .map(|c| c.split('>').next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_read_back_values() {
        let table = sample_table();
        let bytes = XlsxExporter::new().serialize(&table).unwrap();

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);

        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();

        assert_eq!(
            rows[0],
            vec![
                Data::String("stationID".into()),
                Data::String("tempAvg".into()),
                Data::String("humidity".into()),
                Data::String("valid".into()),
            ]
        );
        assert_eq!(
            rows[1],
            vec![
                Data::String("KMAHANOV10".into()),
                Data::Float(14.25),
                Data::Float(63.0),
                Data::Bool(true),
            ]
        );
        assert_eq!(rows[2][1], Data::Float(-2.5));
        assert_eq!(rows[2][3], Data::Bool(false));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_header_row_only_is_styled() {
        let bytes = XlsxExporter::new().serialize(&sample_table()).unwrap();

        let sheet = zip_entry(&bytes, "xl/worksheets/sheet1.xml");
        let header = row_cells(&sheet, 1);
        assert_eq!(header.len(), 4);
        assert!(header.iter().all(|c| c.contains(" s=\"")));
        for row in [2, 3] {
            assert!(row_cells(&sheet, row).iter().all(|c| !c.contains(" s=\"")));
        }

        let styles = zip_entry(&bytes, "xl/styles.xml");
        assert!(styles.contains("<b/>"));
        assert!(styles.contains("patternType=\"solid\""));
        assert!(styles.contains("FFD3D3D3"));
    }

    #[test]
    fn test_custom_header_fill() {
        let bytes = XlsxExporter::new()
            .with_header_fill(0x4F81BD)
            .serialize(&sample_table())
            .unwrap();
        let styles = zip_entry(&bytes, "xl/styles.xml");
        assert!(styles.contains("FF4F81BD"));
    }

    #[test]
    fn test_null_cells_left_blank() {
        let flat: Vec<FlatRecord> = vec![
            vec![("a".to_string(), Leaf::Number(1.into())), ("b".to_string(), Leaf::Number(2.into()))]
                .into_iter()
                .collect(),
            vec![("b".to_string(), Leaf::Number(5.into()))].into_iter().collect(),
        ];
        let table = build_table(&flat).unwrap();
        let bytes = XlsxExporter::new().serialize(&table).unwrap();

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.get_value((2, 0)), Some(&Data::Empty));
        assert_eq!(range.get_value((2, 1)), Some(&Data::Float(5.0)));
    }

    #[test]
    fn test_oversized_string_is_serialization_failure() {
        let flat: Vec<FlatRecord> = vec![vec![("big".to_string(), Leaf::Text("x".repeat(40_000)))]
            .into_iter()
            .collect()];
        let table = build_table(&flat).unwrap();
        assert!(matches!(
            XlsxExporter::new().serialize(&table),
            Err(PwsError::Serialization(_))
        ));
    }

    #[test]
    fn test_kind() {
        let exporter = XlsxExporter::new();
        assert_eq!(exporter.kind(), ExportKind::Xlsx);
        assert_eq!(exporter.file_extension(), "xlsx");
    }
}

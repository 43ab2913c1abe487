//! Excel export functionality.

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::path::{Path, PathBuf};

use crate::models::{Department, Seller};

/// Export sellers to Excel file.
pub fn export_sellers_to_excel(sellers: &[Seller], departments: &[Department], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Sellers")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    // Number format for salary
    let salary_format = Format::new().set_num_format("0.00");

    // Headers
    let headers = ["Id", "Name", "Email", "Birth Date", "Base Salary", "Department"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 8)?; // Id
    worksheet.set_column_width(1, 30)?; // Name
    worksheet.set_column_width(2, 30)?; // Email
    worksheet.set_column_width(3, 12)?; // Birth Date
    worksheet.set_column_width(4, 12)?; // Base Salary
    worksheet.set_column_width(5, 25)?; // Department

    // Data rows
    for (idx, seller) in sellers.iter().enumerate() {
        let row = (idx + 1) as u32;

        if let Some(id) = seller.id {
            worksheet.write_number(row, 0, id as f64)?;
        }
        worksheet.write_string(row, 1, &seller.name)?;
        worksheet.write_string(row, 2, &seller.email)?;
        worksheet.write_string(row, 3, seller.birth_date.to_string())?;
        worksheet.write_number_with_format(row, 4, seller.base_salary, &salary_format)?;

        let dept_name = seller
            .department_id
            .and_then(|id| departments.iter().find(|d| d.id == Some(id)))
            .map(|d| d.name.as_str())
            .unwrap_or("");
        worksheet.write_string(row, 5, dept_name)?;
    }

    // Autofilter
    if !sellers.is_empty() {
        let last_row = sellers.len() as u32;
        worksheet.autofilter(0, 0, last_row, 5)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Export departments to Excel file.
pub fn export_departments_to_excel(departments: &[Department], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Departments")?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let headers = ["Id", "Name"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_column_width(0, 8)?; // Id
    worksheet.set_column_width(1, 30)?; // Name

    for (idx, dept) in departments.iter().enumerate() {
        let row = (idx + 1) as u32;

        if let Some(id) = dept.id {
            worksheet.write_number(row, 0, id as f64)?;
        }
        worksheet.write_string(row, 1, &dept.name)?;
    }

    if !departments.is_empty() {
        let last_row = departments.len() as u32;
        worksheet.autofilter(0, 0, last_row, 1)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_shape() {
        let name = generate_export_filename("sellers");
        assert!(name.starts_with("sellers_"));
        assert!(name.ends_with(".xlsx"));
    }
}

pub mod u101_workbook_import;

pub mod stock_details;

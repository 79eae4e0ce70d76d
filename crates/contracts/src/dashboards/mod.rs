pub mod monthly_summary;

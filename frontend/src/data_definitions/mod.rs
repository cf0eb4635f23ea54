pub mod security_column;

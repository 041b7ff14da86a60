pub mod health;
pub mod tpx_status;

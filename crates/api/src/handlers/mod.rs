pub mod tpx_status;

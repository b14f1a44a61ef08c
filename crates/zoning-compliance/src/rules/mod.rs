pub mod fl_area;

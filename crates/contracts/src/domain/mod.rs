pub mod a001_case;

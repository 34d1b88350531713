pub mod a001_member;

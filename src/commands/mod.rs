pub mod patch_package;

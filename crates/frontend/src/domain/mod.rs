pub mod a025_size_preset;

pub mod virial;

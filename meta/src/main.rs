fn main() {
    multiversx_sc_meta_lib::cli_main::<crypto_ants::AbiProvider>();
}

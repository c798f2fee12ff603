/// Maps an OVAL reference ID to the identifier form used by the CSAF
/// advisory endpoint.
///
/// The aggregate document references advisories as e.g. `ANSA:2023:1234`
/// while the detail endpoint addresses them as `ansa_2023_1234`: the
/// whole string is lower-cased and every `:` becomes `_`. Pure and
/// total; applying it twice is a no-op.
pub fn normalize_ref_id(ref_id: &str) -> String {
    ref_id.to_lowercase().replace(':', "_")
}

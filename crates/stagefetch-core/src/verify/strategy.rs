//! Digest extraction strategies for the sidecar formats mirrors publish.
//!
//! Mirrors do not agree on a checksum format across architectures and
//! releases, so extraction is an ordered list of independent strategies
//! rather than one format baked in.

use once_cell::sync::Lazy;
use regex::Regex;

static HEX64: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9a-fA-F]{64}\b").expect("digest pattern"));

/// Method that produced a digest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMethod {
    None,
    Sha256File,
    AscSignature,
    DigestsFile,
}

impl std::fmt::Display for VerifyMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VerifyMethod::None => "none",
            VerifyMethod::Sha256File => "sha256 sidecar",
            VerifyMethod::AscSignature => "armored signature (best-effort)",
            VerifyMethod::DigestsFile => "DIGESTS manifest",
        };
        f.write_str(s)
    }
}

/// One way of reading a digest for `filename` out of a sidecar document.
pub trait DigestExtract {
    fn method(&self) -> VerifyMethod;
    /// Best-effort scan; `None` means the sidecar does not look like this
    /// strategy's format (or does not cover the artifact).
    fn try_extract(&self, sidecar: &str, filename: &str) -> Option<String>;
}

/// `<digest>  <filename>` lines, as written by sha256sum.
pub struct Sha256File;

impl DigestExtract for Sha256File {
    fn method(&self) -> VerifyMethod {
        VerifyMethod::Sha256File
    }

    fn try_extract(&self, sidecar: &str, filename: &str) -> Option<String> {
        sidecar
            .lines()
            .find(|line| line.contains(filename))
            .and_then(|line| line.split_whitespace().next())
            .map(str::to_string)
    }
}

/// Clearsigned text carrying a digest somewhere in the signed body.
///
/// The signature itself is not validated against any trust chain; a digest
/// token inside the armored text is treated as a checksum source only and
/// never as proof of authenticity.
pub struct AscSignature;

impl DigestExtract for AscSignature {
    fn method(&self) -> VerifyMethod {
        VerifyMethod::AscSignature
    }

    fn try_extract(&self, sidecar: &str, _filename: &str) -> Option<String> {
        HEX64.find(sidecar).map(|m| m.as_str().to_string())
    }
}

/// Multi-artifact, multi-algorithm DIGESTS manifest: the digest shares a
/// line with the artifact name.
pub struct DigestsManifest;

impl DigestExtract for DigestsManifest {
    fn method(&self) -> VerifyMethod {
        VerifyMethod::DigestsFile
    }

    fn try_extract(&self, sidecar: &str, filename: &str) -> Option<String> {
        sidecar
            .lines()
            .filter(|line| line.contains(filename))
            .find_map(|line| HEX64.find(line))
            .map(|m| m.as_str().to_string())
    }
}

/// Strategies in the fixed order they are tried, regardless of which
/// sidecar URL answered.
pub const STRATEGIES: [&dyn DigestExtract; 3] = [&Sha256File, &AscSignature, &DigestsManifest];

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

    #[test]
    fn sha256_file_takes_first_token_of_matching_line() {
        let sidecar = format!("{}  stage3-amd64.tar.xz\n", DIGEST);
        let got = Sha256File.try_extract(&sidecar, "stage3-amd64.tar.xz");
        assert_eq!(got.as_deref(), Some(DIGEST));
    }

    #[test]
    fn sha256_file_ignores_other_files() {
        let sidecar = format!("{}  stage3-arm64.tar.xz\n", DIGEST);
        assert_eq!(Sha256File.try_extract(&sidecar, "stage3-amd64.tar.xz"), None);
    }

    #[test]
    fn asc_finds_hex_token_in_armored_text() {
        let sidecar = format!(
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA512\n\n{}\n-----BEGIN PGP SIGNATURE-----\n...\n-----END PGP SIGNATURE-----\n",
            DIGEST
        );
        let got = AscSignature.try_extract(&sidecar, "stage3-amd64.tar.xz");
        assert_eq!(got.as_deref(), Some(DIGEST));
    }

    #[test]
    fn asc_without_hex_token_yields_nothing() {
        assert_eq!(
            AscSignature.try_extract("no digests here", "stage3-amd64.tar.xz"),
            None
        );
    }

    #[test]
    fn digests_manifest_needs_name_and_token_on_one_line() {
        let sidecar = format!(
            "# SHA256 HASH\n{}  stage3-amd64.tar.xz\n# SHA512 HASH\ndeadbeef  stage3-amd64.tar.xz\n",
            DIGEST
        );
        let got = DigestsManifest.try_extract(&sidecar, "stage3-amd64.tar.xz");
        assert_eq!(got.as_deref(), Some(DIGEST));
    }

    #[test]
    fn digests_manifest_skips_lines_without_token() {
        let sidecar = "stage3-amd64.tar.xz has no digest on this line\n";
        assert_eq!(
            DigestsManifest.try_extract(sidecar, "stage3-amd64.tar.xz"),
            None
        );
    }

    #[test]
    fn strategy_order_is_fixed() {
        let methods: Vec<_> = STRATEGIES.iter().map(|s| s.method()).collect();
        assert_eq!(
            methods,
            vec![
                VerifyMethod::Sha256File,
                VerifyMethod::AscSignature,
                VerifyMethod::DigestsFile
            ]
        );
    }
}

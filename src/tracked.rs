//! The family of packages coerced to the virtual version.

/// Packages published together by the virtual publish step.
pub const TRACKED_PACKAGES: &[&str] = &[
    "@quainetwork/web3",
    "@quainetwork/web3-bzz",
    "@quainetwork/web3-core-helpers",
    "@quainetwork/web3-core-method",
    "@quainetwork/web3-core-promievent",
    "@quainetwork/web3-core-requestmanager",
    "@quainetwork/web3-core-subscriptions",
    "@quainetwork/web3-core",
    "@quainetwork/web3-eth-abi",
    "@quainetwork/web3-eth-accounts",
    "@quainetwork/web3-eth-contract",
    "@quainetwork/web3-eth-ens",
    "@quainetwork/web3-eth-iban",
    "@quainetwork/web3-eth-personal",
    "@quainetwork/web3-eth",
    "@quainetwork/web3-net",
    "@quainetwork/web3-providers-http",
    "@quainetwork/web3-providers-ipc",
    "@quainetwork/web3-providers-ws",
    "@quainetwork/web3-shh",
    "@quainetwork/web3-utils",
];

const MAX_NAME_LENGTH: usize = 214;

/// Resolution key matching `name` at any depth of the dependency tree.
pub fn resolution_key(name: &str) -> String {
    format!("*/**/{}", name)
}

/// Check that `name` is a valid npm package name, scoped or unscoped.
pub fn is_valid_package_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return false;
    }

    let bare = match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, bare)) if is_valid_segment(scope) => bare,
            _ => return false,
        },
        None => name,
    };

    is_valid_segment(bare)
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.starts_with('_')
        && segment.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~')
        })
}

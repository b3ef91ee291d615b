//! Observable-type to field-path mapping
//!
//! The table is fixed and manually curated. Keys with an underscore select
//! a sub-field of one object type (`File_md5` and `File_sha1` are both
//! `file` objects with different hash fields); the portion before the first
//! underscore is the object type.

/// Returns the identifying field path for an observable type, outermost
/// component first, or `None` when the type is not in the table
pub fn field_path(observable_type: &str) -> Option<&'static [&'static str]> {
    let path: &'static [&'static str] = match observable_type {
        "Autonomous-System" => &["number"],
        "Bank-Account" => &["iban"],
        "Cryptographic-Key" => &["value"],
        "Cryptocurrency-Wallet" => &["value"],
        "Directory" => &["path"],
        "Domain-Name" => &["value"],
        "Email-Addr" => &["value"],
        "Email-Message_Body" => &["body"],
        "Email-Message_Subject" => &["subject"],
        "Email-Mime-Part-Type" => &["body"],
        "File_md5" => &["hashes", "MD5"],
        "File_sha1" => &["hashes", "SHA-1"],
        "File_sha256" => &["hashes", "SHA-256"],
        "File_sha512" => &["hashes", "SHA-512"],
        "Hostname" => &["value"],
        "IPv4-Addr" => &["value"],
        "IPv6-Addr" => &["value"],
        "Mac-Addr" => &["value"],
        "Media-Content" => &["url"],
        "Mutex" => &["name"],
        "Network-Traffic" => &["dst_port"],
        "Payment-Card" => &["card_number"],
        "Phone-Number" => &["value"],
        "Process" => &["command_line"],
        "Software" => &["name"],
        "Text" => &["value"],
        "Url" => &["value"],
        "User-Account" => &["account_login"],
        "Windows-Registry-Key" => &["key"],
        "Windows-Registry-Value-Type" => &["name"],
        _ => return None,
    };
    Some(path)
}

/// Returns the lowercased object-type segment for an observable type
///
/// Types without an underscore lowercase whole; otherwise only the portion
/// before the first underscore names the object type.
pub fn object_type(observable_type: &str) -> String {
    match observable_type.split_once('_') {
        Some((head, _)) => head.to_lowercase(),
        None => observable_type.to_lowercase(),
    }
}

/// Returns true if the observable type is in the mapping table
pub fn is_supported(observable_type: &str) -> bool {
    field_path(observable_type).is_some()
}

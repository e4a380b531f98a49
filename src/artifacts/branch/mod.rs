//! Branch names and HEAD states

pub mod branch_name;

/// Git's ref-name rules: no leading dot, no `..`, no `/.`, no leading or
/// trailing slash, no `.lock` suffix, no `@{`, no control or special characters
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

use crate::error::{Error, Result};

// Turns "<major>.<minor>..." into major*10+minor. ES drivers prefix
// the number ("OpenGL ES 3.2", "OpenGL ES-CM 1.1"), so anything before
// the first digit is skipped.
pub fn parse_version(version: &str) -> Result<u32> {
    let start = match version.find(|c: char| c.is_ascii_digit()) {
        Some(i) => i,
        None => return Err(Error::BadVersion(version.to_string())),
    };
    let rest = &version[start..];
    let (major, rest) = leading_number(rest);
    let rest = match rest.strip_prefix('.') {
        Some(r) => r,
        None => return Err(Error::BadVersion(version.to_string())),
    };
    let (minor, _) = leading_number(rest);
    return match (major, minor) {
        (Some(major), Some(minor)) => Ok(major * 10 + minor),
        _ => Err(Error::BadVersion(version.to_string())),
    };
}

fn leading_number(s: &str) -> (Option<u32>, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return (None, s);
    }
    return (s[..end].parse().ok(), &s[end..]);
}

// Exact token search in a space separated extension list. A hit must
// be followed by a separator or the end, so "GL_foo" doesn't match
// inside "GL_foobar".
pub fn extension_in_list(list: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let step = name.chars().next().map_or(1, |c| c.len_utf8());
    let mut offset = 0;
    while let Some(found) = list[offset..].find(name) {
        let pos = offset + found;
        let starts_token = pos == 0 || list.as_bytes()[pos - 1] == b' ';
        let after = &list[pos + name.len()..];
        let ends_token = after.is_empty() || after.starts_with(' ');
        if starts_token && ends_token {
            return true;
        }
        offset = pos + step;
    }
    return false;
}

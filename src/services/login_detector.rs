const PROTECTED_SITES: [&str; 15] = [
    "linkedin.com",
    "facebook.com",
    "instagram.com",
    "netflix.com",
    "gmail.com",
    "outlook.com",
    "amazon.com/account",
    "amazon.com/gp/your-account",
    "dropbox.com/home",
    "slack.com/messages",
    "discord.com/channels",
    "twitter.com/home",
    "x.com/home",
    "github.com/settings",
    "github.com/login",
];

const ACCESS_DENIED_MARKERS: [&str; 6] = [
    "password required",
    "not logged in",
    "access denied",
    "login first",
    "401",
    "403",
];

/// Only major protected sites and blunt access-denied markers count, a login
/// link somewhere on the page does not.
pub fn detect_login_required(url: &str, html: &str, status: u16) -> bool {
    if status == 401 || status == 403 {
        return true;
    }

    let url = url.to_lowercase();
    if PROTECTED_SITES.iter().any(|site| url.contains(site)) {
        return true;
    }

    let html = html.to_lowercase();
    ACCESS_DENIED_MARKERS
        .iter()
        .any(|marker| html.contains(marker))
}

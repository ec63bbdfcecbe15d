/// Rupee sign prefixed to formatted amounts
pub const RUPEE: char = '₹';

/// Format an amount as rupees with comma thousands separators
///
/// `format_inr(100000.0, 0)` gives `₹100,000` and `format_inr(30000.0, 2)`
/// gives `₹30,000.00`.
pub fn format_inr(amount: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 2);
    if amount.is_sign_negative() && amount != 0.0 {
        out.push('-');
    }
    out.push(RUPEE);
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

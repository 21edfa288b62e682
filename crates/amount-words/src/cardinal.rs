//! English cardinal numbers

/// Names for 0-19
const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Names for the tens (index = tens digit)
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale names for each group of three digits
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Format an integer as English words
///
/// Tens are hyphenated, "and" follows a hundred, and groups are joined with
/// ", " except for a trailing group below one hundred, which is joined with
/// " and ".
///
/// # Examples
/// ```
/// use amount_words::cardinal;
/// assert_eq!(cardinal(0), "zero");
/// assert_eq!(cardinal(123), "one hundred and twenty-three");
/// assert_eq!(cardinal(1001), "one thousand and one");
/// assert_eq!(cardinal(1100), "one thousand, one hundred");
/// ```
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    // (value, scale index), most significant first
    let mut groups = Vec::new();
    let mut rest = n;
    let mut scale = 0;
    while rest > 0 {
        let group = (rest % 1000) as usize;
        if group > 0 {
            groups.push((group, scale));
        }
        rest /= 1000;
        scale += 1;
    }
    groups.reverse();

    let last = groups.len() - 1;
    let mut result = String::new();

    for (i, &(group, scale)) in groups.iter().enumerate() {
        if i > 0 {
            let trailing_small = i == last && scale == 0 && group < 100;
            result.push_str(if trailing_small { " and " } else { ", " });
        }

        result.push_str(&below_thousand(group));
        if scale > 0 {
            result.push(' ');
            result.push_str(SCALES[scale]);
        }
    }

    result
}

fn below_thousand(n: usize) -> String {
    match (n / 100, n % 100) {
        (0, rest) => below_hundred(rest),
        (hundreds, 0) => format!("{} hundred", ONES[hundreds]),
        (hundreds, rest) => format!("{} hundred and {}", ONES[hundreds], below_hundred(rest)),
    }
}

fn below_hundred(n: usize) -> String {
    if n < 20 {
        return ONES[n].to_string();
    }

    match n % 10 {
        0 => TENS[n / 10].to_string(),
        unit => format!("{}-{}", TENS[n / 10], ONES[unit]),
    }
}

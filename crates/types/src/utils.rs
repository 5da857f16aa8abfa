pub fn strip_markup(input: &str) -> Result<String, html_entities::DecodeError> {
    // Replace <br> with newline
    let br_re = regex::Regex::new("<br\\s*/?>").unwrap();
    let replaced = br_re.replace_all(input, "\n");

    // Remove remaining tags before decoding, so entities typed by the
    // poster (&lt;b&gt; and friends) survive as literal text
    let tag_re = regex::Regex::new("<[^>]*>").unwrap();
    let stripped = tag_re.replace_all(&replaced, "");

    html_entities::decode_html_entities(&stripped)
}

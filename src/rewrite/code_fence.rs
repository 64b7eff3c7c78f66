//! Liquid highlight blocks to Markdown code fences.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// `{% highlight ruby linenos %}`, `{%- highlight yaml -%}`
static HIGHLIGHT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{%-?\s*highlight\s+(\w+)[^%]*?-?%\}").expect("valid highlight regex")
});

static HIGHLIGHT_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{%-?\s*endhighlight\s*-?%\}").expect("valid endhighlight regex")
});

/// Replace `{% highlight <lang> %}` with a ```` ```<lang> ```` fence and
/// `{% endhighlight %}` with a closing fence.
pub fn translate(body: &str) -> String {
    let opened = HIGHLIGHT_OPEN.replace_all(body, "```${1}");
    HIGHLIGHT_CLOSE.replace_all(&opened, "```").into_owned()
}

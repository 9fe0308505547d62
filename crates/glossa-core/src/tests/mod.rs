
/// Wrap table rows the way the dictionary site serves them
fn page(rows: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>chat - WordReference</title></head>
<body>
<div id="article">
  <div id="articleWRD">
    <table class="WRD">
{rows}
    </table>
  </div>
</div>
</body></html>"#
    )
}

const CHAT_ROW: &str = r#"<tr class="even" id="fren:14571"><td class="FrWrd"><strong>chat</strong> <em class="tooltip POS2">nm<span><i>nom masculin</i></span></em></td><td> a small domesticated animal <span class="dense">feline</span></td><td class="ToWrd">cat <em class="tooltip POS2">n<span><i>noun</i></span></em></td></tr>"#;

const KITTY_ROW: &str = r#"<tr class="even"><td>&nbsp;</td><td class="To2"><span class="dense">informal</span></td><td class="ToWrd">kitty <em class="tooltip POS2">n</em></td></tr>"#;

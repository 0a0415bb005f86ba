
use std::time::Duration;

use lexa_config::source::SourceConfig;
use wiremock::MockServer;

use crate::client::WiktionaryClient;

/// Entry page for "cat" with an English and a French section.
pub const CAT_PAGE: &str = r##"<!DOCTYPE html>
<html><head><title>cat - Wiktionary</title></head><body>
<div id="toc" class="toc"><ul>
<li class="toclevel-1"><a href="#English"><span class="tocnumber">1</span> <span class="toctext">English</span></a>
<ul>
<li class="toclevel-2"><a href="#Pronunciation"><span class="tocnumber">1.1</span> <span class="toctext">Pronunciation</span></a></li>
<li class="toclevel-2"><a href="#Noun"><span class="tocnumber">1.2</span> <span class="toctext">Noun</span></a></li>
</ul>
</li>
<li class="toclevel-1"><a href="#French"><span class="tocnumber">2</span> <span class="toctext">French</span></a>
<ul>
<li class="toclevel-2"><a href="#Noun_2"><span class="tocnumber">2.1</span> <span class="toctext">Noun</span></a></li>
</ul>
</li>
</ul></div>
<h2><span class="mw-headline" id="English">English</span></h2>
<h3><span class="mw-headline" id="Pronunciation">Pronunciation</span></h3>
<ul>
<li><a href="/wiki/Wiktionary:IPA">IPA</a><sup>(key)</sup>: <span class="IPA">/kæt/</span></li>
<li><table class="audiotable"><tbody><tr><td>Audio (US)</td><td><div class="mediaContainer"><audio><source src="//upload.wikimedia.org/en-us-cat.ogg"></audio></div></td></tr></tbody></table></li>
</ul>
<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<p><strong class="headword">cat</strong> (plural <b>cats</b>)</p>
<ol>
<li>A small domesticated carnivorous mammal.<dl><dd>The cat sat on the mat. (proverbial)</dd></dl></li>
</ol>
<h2><span class="mw-headline" id="French">French</span></h2>
<h3><span class="mw-headline" id="Noun_2">Noun</span></h3>
<p><strong class="headword">cat</strong> <i>m</i></p>
<ol>
<li>catamaran</li>
</ol>
</body></html>"##;

pub fn client_for(server: &MockServer, max_retries: u32) -> WiktionaryClient {
    let config = SourceConfig {
        base_url: server.uri(),
        max_retries,
        timeout_seconds: 5,
        ..SourceConfig::default()
    };
    WiktionaryClient::new(&config)
        .unwrap()
        .with_retry_delay(Duration::from_millis(1))
}

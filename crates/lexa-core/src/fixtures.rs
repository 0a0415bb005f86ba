//! Trimmed copies of real entry pages used across the unit tests.

/// "run": English with two etymologies and a pronunciation list, plus a
/// Swedish entry after it.
pub const RUN_PAGE: &str = r##"<!DOCTYPE html>
<html><head><title>run - Wiktionary</title></head><body>
<div class="sister-wikipedia sister-project"><p>English Wikipedia has an article on run</p></div>
<div id="toc" class="toc"><div class="toctitle"><h2 id="mw-toc-heading">Contents</h2></div>
<ul>
<li class="toclevel-1"><a href="#English"><span class="tocnumber">1</span> <span class="toctext">English</span></a>
<ul>
<li class="toclevel-2"><a href="#Pronunciation"><span class="tocnumber">1.1</span> <span class="toctext">Pronunciation</span></a></li>
<li class="toclevel-2"><a href="#Etymology_1"><span class="tocnumber">1.2</span> <span class="toctext">Etymology 1</span></a>
<ul>
<li class="toclevel-3"><a href="#Verb"><span class="tocnumber">1.2.1</span> <span class="toctext">Verb</span></a></li>
</ul>
</li>
<li class="toclevel-2"><a href="#Etymology_2"><span class="tocnumber">1.3</span> <span class="toctext">Etymology 2</span></a>
<ul>
<li class="toclevel-3"><a href="#Noun"><span class="tocnumber">1.3.1</span> <span class="toctext">Noun</span></a>
<ul>
<li class="toclevel-4"><a href="#Synonyms"><span class="tocnumber">1.3.1.1</span> <span class="toctext">Synonyms</span></a></li>
</ul>
</li>
</ul>
</li>
</ul>
</li>
<li class="toclevel-1"><a href="#Swedish"><span class="tocnumber">2</span> <span class="toctext">Swedish</span></a>
<ul>
<li class="toclevel-2"><a href="#Noun_2"><span class="tocnumber">2.1</span> <span class="toctext">Noun</span></a></li>
</ul>
</li>
</ul>
</div>
<h2><span class="mw-headline" id="English">English</span></h2>
<h3><span class="mw-headline" id="Pronunciation">Pronunciation</span></h3>
<ul>
<li>UK <a href="/wiki/Wiktionary:IPA">IPA</a><sup>(key)</sup>: <span class="IPA">/ɹʌn/</span><sup class="reference">[1]</sup>
<ul>
<li>(US) <a href="/wiki/Wiktionary:IPA">IPA</a><sup>(key)</sup>: <span class="IPA">/ɹʌn/</span>, <span class="IPA">/ɹɐn/</span></li>
</ul>
</li>
<li><table class="audiotable"><tbody><tr><td>Audio (UK)</td><td><div class="mediaContainer"><audio controls=""><source src="//upload.wikimedia.org/run-uk.ogg" type="audio/ogg"></audio></div></td></tr></tbody></table></li>
<li>Rhymes: <a href="/wiki/Rhymes:English/%CA%8Cn">-ʌn</a></li>
</ul>
<h3><span class="mw-headline" id="Etymology_1">Etymology 1</span></h3>
<p>From Middle English <i>rinnen</i>.</p>
<h4><span class="mw-headline" id="Verb">Verb</span></h4>
<p><strong class="headword">run</strong> (third-person singular simple present <b>runs</b>)</p>
<ol>
<li>To move swiftly.<dl><dd>The children ran to the store. (informal)</dd></dl></li>
<li>To manage a business.<dl><dd>She runs a bakery.</dd></dl>
<ul>
<li><div class="cited-source">1851, Herman Melville</div></li>
</ul>
</li>
</ol>
<h3><span class="mw-headline" id="Etymology_2">Etymology 2</span></h3>
<p>From Old English <i>ryne</i>.</p>
<h4><span class="mw-headline" id="Noun">Noun</span></h4>
<p><strong class="headword">run</strong> (plural <b>runs</b>)</p>
<ol>
<li>Act or instance of running.<dl><dd>I went for a run.</dd></dl></li>
</ol>
<h5><span class="mw-headline" id="Synonyms">Synonyms</span></h5>
<ul>
<li>sprint</li>
</ul>
<h2><span class="mw-headline" id="Swedish">Swedish</span></h2>
<h3><span class="mw-headline" id="Noun_2">Noun</span></h3>
<p><strong class="headword">run</strong></p>
<ol>
<li>a Swedish sense</li>
</ol>
</body></html>"##;

/// Single-language page without a table of contents.
pub const NO_TOC_PAGE: &str = r##"<!DOCTYPE html>
<html><head><title>zizifa - Wiktionary</title></head><body>
<h2><span class="mw-headline" id="English">English</span></h2>
<h3><span class="mw-headline" id="Pronunciation">Pronunciation</span></h3>
<p>IPA: /ˈzɪzɪvə/</p>
<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<p><strong class="headword">zizifa</strong> (plural <b>zizifas</b>)</p>
<ol>
<li>A small thorny tree.<dl><dd>The zizifa grew by the wall.</dd></dl></li>
</ol>
</body></html>"##;

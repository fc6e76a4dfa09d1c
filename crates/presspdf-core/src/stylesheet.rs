//! Embedded print stylesheet
//!
//! The stylesheet is a fixed contract: A4 with 2cm margins, print-safe
//! typography, and page-break control for headings, media, tables, and
//! page builder wrapper elements. It is not configurable.

pub const PRINT_STYLESHEET: &str = "\
@page {
    margin: 2cm;
    size: A4;
}
body {
    font-family: Helvetica, sans-serif;
    color: #333;
    line-height: 1.6;
    font-size: 12pt;
    margin: 0;
    padding: 0;
}
h1 {
    font-size: 24pt;
    margin-bottom: 1cm;
    color: #000;
    page-break-after: avoid;
}
h2 {
    font-size: 18pt;
    margin: 1em 0;
    page-break-after: avoid;
}
h3 {
    font-size: 14pt;
    margin: 1em 0;
    page-break-after: avoid;
}
p {
    margin: 0.5em 0;
    orphans: 3;
    widows: 3;
}
img {
    max-width: 100%;
    height: auto;
    margin: 1em 0;
    page-break-inside: avoid;
}
table {
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
    page-break-inside: avoid;
}
th, td {
    border: 1px solid #ddd;
    padding: 8px;
    text-align: left;
}
.footer {
    text-align: center;
    font-size: 9pt;
    color: #666;
    margin-top: 2cm;
    border-top: 1px solid #ddd;
    padding-top: 0.5cm;
    page-break-before: avoid;
}
.builder-section {
    clear: both;
    page-break-inside: avoid;
}
.builder-widget {
    page-break-inside: avoid;
}
[style*=\"background-image\"] {
    background-image: none !important;
}
ul, ol {
    padding-left: 2em;
    margin: 1em 0;
}
li {
    margin: 0.5em 0;
}
";

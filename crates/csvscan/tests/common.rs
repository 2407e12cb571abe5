#![allow(missing_docs)]

/// A document exercising every terminator shape and quoting form: CRLF, a
/// lone LF, an LF CR pair, a lone CR, embedded delimiters and newlines
/// inside quotes, doubled quotes, empty fields, a non-UTF-8 byte, and a
/// final record without a trailing newline.
#[rustfmt::skip]
pub const DOCUMENT: &[u8] =
    b"name,country,motto,note\r\n\
      Ulm,Germany,\"nicht nur, sondern auch\",plain\r\n\
      \"Stra\xDFe 9\",Bulgaria,\"first\r\nsecond\",\n\
      Quoteville,\"doubled \"\"quotes\"\" here\",x\n\r\
      ,,\"\",middle\r\
      final,\"closing\"";

/// [`DOCUMENT`] decoded: one entry per record, one byte string per field.
pub const ROWS: [&[&[u8]]; 6] = [
    &[b"name", b"country", b"motto", b"note"],
    &[b"Ulm", b"Germany", b"nicht nur, sondern auch", b"plain"],
    &[b"Stra\xDFe 9", b"Bulgaria", b"first\r\nsecond", b""],
    &[b"Quoteville", b"doubled \"quotes\" here", b"x"],
    &[b"", b"", b"", b"middle"],
    &[b"final", b"closing"],
];

// [`DOCUMENT`] cut on transition seams: mid-field, inside newline pairs,
// around quotes. Feeding these as separate reads must parse identically to
// the whole document.
#[rustfmt::skip]
pub const CHUNKS: [&[u8]; 11] = [
    b"name,cou",                                // cut inside an unquoted field
    b"ntry,motto,note\r",                       // CR LF split across chunks
    b"\nUlm,Germany,\"",                        // ends right after an opening quote
    b"nicht nur, son",                          // delimiter inside a quoted body
    b"dern auch\"",                             // ends right after a closing quote
    b",plain\r\n\"Stra\xDFe 9\",Bulgaria,\"first\r", // quoted CR LF content split after the CR
    b"\nsecond\",",                             // delimiter last; the record end opens the next chunk
    b"\nQuoteville,\"doubled \"",               // ends between the two quotes of a doubled pair
    b"\"quotes\"\" here\",x\n",                 // ends after the LF of an LF CR pair
    b"\r,,\"\",middle\r",                       // starts on the CR partner, ends on a lone CR record end
    b"final,\"closing\"",                       // final record, no trailing newline
];

#[test]
fn chunks_reassemble_the_document() {
    assert_eq!(CHUNKS.concat(), DOCUMENT);
}

//! Single-open accordion state used by the FAQ blocks

/// Index of the item open after clicking `clicked`, given the current one.
///
/// Clicking the open item closes it; clicking any other item opens it and
/// closes the previous one.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// A question and its answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HOME_FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "Hvordan kan dere hjelpe min nettside med å rangere høyere på Google?",
        answer: "Vi bruker en velprøvd strategi som kombinerer teknisk optimalisering, innholdsproduksjon og autoritetsbygging. Ved å analysere dine konkurrenter og tette de tekniske hullene på din side, sørger vi for at Google prioriterer deg foran konkurrentene. Vi gir deg ikke bare trafikk, men de riktige kundene.",
    },
    FaqEntry {
        question: "Hvor raskt kan jeg forvente resultater når jeg jobber med dere?",
        answer: "Mens SEO generelt tar tid (3–12 måneder), starter vi alltid med \"lavthengende frukter\". Ved å optimalisere ditt eksisterende innhold kan vi ofte se positive bevegelser i løpet av de første ukene. Vi legger en langsiktig plan som sikrer at veksten din blir stabil og varig.",
    },
    FaqEntry {
        question: "Kan dere sørge for at min bedrift blir nevnt av AI-er som ChatGPT?",
        answer: "Ja, dette er en sentral del av vår moderne SEO-strategi (GEO). Vi strukturerer innholdet ditt med presise data og autoritære svar som er skreddersydd for at AI-modeller skal plukke det opp. Målet vårt er at når noen spør en AI om anbefalinger i din bransje, er det ditt navn som dukker opp.",
    },
    FaqEntry {
        question: "Hvorfor bør jeg velge dere i stedet for å gjøre SEO selv?",
        answer: "SEO endrer seg nesten daglig. Ved å la oss håndtere det tekniske, søkeordsanalysen og innholdet, sparer du hundrevis av timer og unngår kostbare feil. Vi sitter på verktøyene og erfaringen som trengs for å tolke algoritmene korrekt, slik at du kan fokusere på å drive din bedrift.",
    },
    FaqEntry {
        question: "Hvordan vet jeg at strategien deres faktisk fungerer?",
        answer: "Vi tror på full åpenhet. Du vil motta jevnlige rapporter som viser nøyaktig hvordan rangeringen din forbedrer seg, hvor mye trafikk som kommer inn, og viktigst av alt: hvor mange av disse som konverterer til faktiske kunder. Din suksess er vårt bevis på at metoden fungerer.",
    },
];

pub const GEO_FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "Hvor lang tid tar det før AI gir resultater?",
        answer: "Med vår AI-prosess identifiserer vi kritiske tekniske feil på timer. De fleste kunder ser en signifikant økning i rangering innen 30-60 dager.",
    },
    FaqEntry {
        question: "Hvorfor er Sikt overlegen byråer i 2026?",
        answer: "Byråer bruker ofte utdaterte verktøy. Vår AI utfører sanntidsanalyser og konkurrentovervåkning 24/7 for å forutsi algoritme-endringer.",
    },
    FaqEntry {
        question: "Hva er kostnaden ved å ikke ha en plan?",
        answer: "For en bedrift i Norge betyr usynlighet at 95% av potensielle kunder ender hos en konkurrent. Dette koster ofte titusenvis hver eneste måned.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_from_closed() {
        assert_eq!(toggle_open(None, 2), Some(2));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn test_opening_another_item_replaces() {
        assert_eq!(toggle_open(Some(0), 3), Some(3));
    }

    #[test]
    fn test_at_most_one_open_over_click_sequence() {
        let mut open = None;
        for click in [0, 1, 1, 4, 0] {
            open = toggle_open(open, click);
        }
        assert_eq!(open, Some(0));
    }

    #[test]
    fn test_faq_entries_are_filled() {
        assert!(
            HOME_FAQ
                .iter()
                .chain(GEO_FAQ.iter())
                .all(|e| !e.question.is_empty() && !e.answer.is_empty())
        );
    }
}

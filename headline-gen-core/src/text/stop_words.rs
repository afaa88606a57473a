use std::collections::HashSet;

/// Spanish function words, as shipped by the NLTK stop-word corpus.
const SPANISH: &[&str] = &[
	// articles, prepositions, conjunctions
	"de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
	"con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
	"este", "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
	"me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos",
	"uno", "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí",
	"antes", "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa",
	"estos", "mucho", "quienes", "nada", "muchos", "cual", "poco", "ella", "estar", "estas",
	"algunas", "algo", "nosotros",
	// pronouns and possessives
	"mi", "mis", "tú", "te", "ti", "tu", "tus", "ellas", "nosotras", "vosotros", "vosotras",
	"os", "mío", "mía", "míos", "mías", "tuyo", "tuya", "tuyos", "tuyas", "suyo", "suya",
	"suyos", "suyas", "nuestro", "nuestra", "nuestros", "nuestras", "vuestro", "vuestra",
	"vuestros", "vuestras", "esos", "esas",
	// estar
	"estoy", "estás", "está", "estamos", "estáis", "están", "esté", "estés", "estemos",
	"estéis", "estén", "estaré", "estarás", "estará", "estaremos", "estaréis", "estarán",
	"estaría", "estarías", "estaríamos", "estaríais", "estarían", "estaba", "estabas",
	"estábamos", "estabais", "estaban", "estuve", "estuviste", "estuvo", "estuvimos",
	"estuvisteis", "estuvieron", "estuviera", "estuvieras", "estuviéramos", "estuvierais",
	"estuvieran", "estuviese", "estuvieses", "estuviésemos", "estuvieseis", "estuviesen",
	"estando", "estado", "estada", "estados", "estadas", "estad",
	// haber
	"he", "has", "ha", "hemos", "habéis", "han", "haya", "hayas", "hayamos", "hayáis",
	"hayan", "habré", "habrás", "habrá", "habremos", "habréis", "habrán", "habría",
	"habrías", "habríamos", "habríais", "habrían", "había", "habías", "habíamos",
	"habíais", "habían", "hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron",
	"hubiera", "hubieras", "hubiéramos", "hubierais", "hubieran", "hubiese", "hubieses",
	"hubiésemos", "hubieseis", "hubiesen", "habiendo", "habido", "habida", "habidos",
	"habidas",
	// ser
	"soy", "eres", "es", "somos", "sois", "son", "sea", "seas", "seamos", "seáis", "sean",
	"seré", "serás", "será", "seremos", "seréis", "serán", "sería", "serías", "seríamos",
	"seríais", "serían", "era", "eras", "éramos", "erais", "eran", "fui", "fuiste", "fue",
	"fuimos", "fuisteis", "fueron", "fuera", "fueras", "fuéramos", "fuerais", "fueran",
	"fuese", "fueses", "fuésemos", "fueseis", "fuesen",
	// sentir
	"sintiendo", "sentido", "sentida", "sentidos", "sentidas", "siente", "sentid",
	// tener
	"tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen", "tenga", "tengas",
	"tengamos", "tengáis", "tengan", "tendré", "tendrás", "tendrá", "tendremos",
	"tendréis", "tendrán", "tendría", "tendrías", "tendríamos", "tendríais", "tendrían",
	"tenía", "tenías", "teníamos", "teníais", "tenían", "tuve", "tuviste", "tuvo",
	"tuvimos", "tuvisteis", "tuvieron", "tuviera", "tuvieras", "tuviéramos", "tuvierais",
	"tuvieran", "tuviese", "tuvieses", "tuviésemos", "tuvieseis", "tuviesen", "teniendo",
	"tenido", "tenida", "tenidos", "tenidas", "tened",
];

/// Immutable set of words removed by the clean normalization mode.
///
/// Entries are stored lower-cased; lookups expect an already case-folded
/// token, which is what the normalizer produces.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
	words: HashSet<String>,
}

impl StopWords {
	/// Built-in Spanish list.
	pub fn spanish() -> Self {
		SPANISH.iter().collect()
	}

	/// An empty set: clean mode then only lower-cases and drops numbers.
	pub fn none() -> Self {
		Self::default()
	}

	pub fn contains(&self, token: &str) -> bool {
		self.words.contains(token)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			words: iter
				.into_iter()
				.map(|word| word.as_ref().trim().to_lowercase())
				.filter(|word| !word.is_empty())
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn spanish_list_contains_function_words() {
		let stop_words = StopWords::spanish();
		for word in ["de", "la", "que", "el", "más", "estuviésemos", "tened"] {
			assert!(stop_words.contains(word), "{word} should be a stop word");
		}
		assert!(!stop_words.contains("gobierno"));
	}

	#[test]
	fn custom_lists_are_case_folded() {
		let stop_words: StopWords = ["The", " AND ", ""].into_iter().collect();
		assert_eq!(stop_words.len(), 2);
		assert!(stop_words.contains("the"));
		assert!(stop_words.contains("and"));
	}

	#[test]
	fn none_is_empty() {
		assert!(StopWords::none().is_empty());
	}
}

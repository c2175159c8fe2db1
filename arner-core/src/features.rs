//! # Engenharia de Features para NER em Árabe
//!
//! Para cada token, o motor produz a sequência ordenada de features
//! textuais `nome=valor` que o modelo de sequência usa para pontuar
//! labels. As features capturam sinais ortográficos, morfológicos e de
//! contexto próprios do árabe jornalístico.
//!
//! ## Features Implementadas
//!
//! ### Token atual
//! - Forma normalizada da palavra (variantes de alef, ya e ta marbuta)
//! - Morfologia composta: normalização + sufixo de plural + marca feminina
//! - Prefixo de 2 e sufixo de 3 caracteres
//! - Token puramente numérico
//! - Pertencimento ao léxico de nomes conhecidos
//!
//! ### Contexto (janela de 2 tokens anteriores, 1 posterior)
//! - Palavra anterior e posterior
//! - Título precedente com artigo definido (ex: الرئيس antes de um nome)
//! - Instituição/nacionalidade precedente, com e sem artigo
//! - Heurística de verbo de 4 letras na posição anterior (ex: يقول, وقال)
//! - Nome conhecido na posição anterior
//!
//! ## Contrato de isolamento
//!
//! O `previous_label` é visível ao cálculo mas **nenhum** label verdadeiro
//! de outra posição é acessível: só as palavras cruas servem de contexto.
//! É isso que mantém o cálculo idêntico em treino e em decodificação,
//! quando nenhum label verdadeiro existe.
//!
//! ## Presença vs. valor
//!
//! As regras de lookback que olham duas posições para trás
//! (`precededTitle`, `precededInsOrNat`, `precededInstitutional`) são
//! **ausentes** nas posições 0 e 1, não emitidas como `false`. Todas as
//! outras regras booleanas sempre emitem nome e valor explícito. Testes
//! devem verificar presença/ausência, não apenas o valor.

use regex::Regex;

use crate::lexicon::Lexicon;

/// Prefixo do artigo definido árabe, usado pelas regras de contexto.
const DEFINITE_ARTICLE: &str = "ال";

/// Motor de cálculo de features.
///
/// Função pura dos três argumentos de [`compute_features`] mais o léxico
/// somente-leitura injetado na construção: entradas idênticas produzem
/// sempre a mesma sequência de features, na mesma ordem. Sem estado
/// mutável compartilhado, o motor pode ser usado de várias threads.
///
/// [`compute_features`]: FeatureEngine::compute_features
#[derive(Debug)]
pub struct FeatureEngine {
    lexicon: Lexicon,
    number_re: Regex,
    ins_or_nat_re: Regex,
    institutional_re: Regex,
}

impl FeatureEngine {
    /// Cria o motor com o léxico injetado, compilando os padrões uma única vez.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            number_re: Regex::new("^[0-9]+$").expect("padrão estático válido"),
            // Artigo definido + qualquer miolo + sufixo de nisba/feminino
            ins_or_nat_re: Regex::new("^ال.*[ةهي]$").expect("padrão estático válido"),
            // Primeira letra fora do artigo + terminação institucional
            institutional_re: Regex::new("^[^ال].*[ةه]$").expect("padrão estático válido"),
        }
    }

    /// Léxico injetado no motor.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Calcula a sequência ordenada de features do token em `position`.
    ///
    /// `words` é a sentença inteira já materializada: features podem olhar
    /// qualquer posição da mesma sequência. `_previous_label` faz parte do
    /// contrato (é o único label visível ao cálculo, e futuras features de
    /// histórico o usariam), mas nenhuma das regras atuais depende dele.
    ///
    /// # Panics
    ///
    /// Se `position >= words.len()`: erro de programação, falha alto.
    pub fn compute_features(
        &self,
        words: &[String],
        _previous_label: &str,
        position: usize,
    ) -> Vec<String> {
        assert!(
            position < words.len(),
            "posição {position} fora do intervalo [0, {})",
            words.len()
        );

        let n = words.len();
        let word = &words[position];
        let mut features = Vec::new();

        // === Normalização ortográfica ===
        let normalized = normalize(word);
        features.push(format!("normalizedWord={normalized}"));

        // === Morfologia composta ===
        // `normalized=true` significa que o token já estava na forma canônica.
        let unchanged = normalized == *word;
        let plural = word.ends_with("ون") || word.ends_with("ين");
        let feminine = word.ends_with("ه") || word.ends_with("ات");
        features.push(format!(
            "normalized={unchanged}|plural={plural}|feminine={feminine}"
        ));

        // === Contexto adjacente ===
        // Ausentes nas bordas da sequência, nunca emitidas vazias.
        if position > 0 {
            features.push(format!("previousWord={}", words[position - 1]));
        }
        if position + 1 < n {
            features.push(format!("nextWord={}", words[position + 1]));
        }

        // === Título precedente (ex: الرئيس بشار) ===
        if let Some(hit) = self.preceded_by_title(words, position) {
            features.push(format!("precededTitle={hit}"));
        }

        // === Afixos ===
        let chars: Vec<char> = word.chars().collect();
        if chars.len() > 2 {
            let prefix: String = chars[..2].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            features.push(format!("prefix={prefix}"));
            features.push(format!("suffix={suffix}"));
        }

        // === Token numérico (ex: 2021) ===
        features.push(format!("number={}", self.number_re.is_match(word)));

        // === Instituição ou nacionalidade precedente, com artigo (ex: السعودي) ===
        if let Some(hit) = self.preceded_matching(words, position, &self.ins_or_nat_re) {
            features.push(format!("precededInsOrNat={hit}"));
        }

        // === Instituição precedente sem artigo (ex: حكومة) ===
        if let Some(hit) = self.preceded_matching(words, position, &self.institutional_re) {
            features.push(format!("precededInstitutional={hit}"));
        }

        // === Heurística de verbo de 4 letras (ex: يقول, وقال) ===
        let verb = position > 0 && words[position - 1].chars().count() == 4;
        features.push(format!("precededVerb={verb}"));

        // === Léxico de nomes conhecidos ===
        features.push(format!("popularName={}", self.lexicon.contains(word)));
        let prev_popular = position > 0 && self.lexicon.contains(&words[position - 1]);
        features.push(format!("precededByPopularName={prev_popular}"));

        features
    }

    /// Alguma das duas palavras anteriores parece um título com artigo?
    ///
    /// `None` nas posições 0 e 1: a feature fica ausente, não `false`.
    fn preceded_by_title(&self, words: &[String], position: usize) -> Option<bool> {
        if position <= 1 {
            return None;
        }
        Some(is_title_like(&words[position - 1]) || is_title_like(&words[position - 2]))
    }

    /// Alguma das duas palavras anteriores casa com o padrão dado?
    ///
    /// Mesma guarda posicional de [`preceded_by_title`]: `None` quando não
    /// existem duas posições anteriores.
    ///
    /// [`preceded_by_title`]: FeatureEngine::preceded_by_title
    fn preceded_matching(&self, words: &[String], position: usize, re: &Regex) -> Option<bool> {
        if position <= 1 {
            return None;
        }
        Some(re.is_match(&words[position - 1]) || re.is_match(&words[position - 2]))
    }
}

/// Palavra com cara de título: artigo definido, mais de 3 caracteres,
/// token único sem espaço interno.
fn is_title_like(word: &str) -> bool {
    word.starts_with(DEFINITE_ARTICLE) && word.chars().count() > 3 && !word.contains(' ')
}

/// Normaliza variantes visuais/fonéticas de letras árabes para uma forma
/// canônica: alef com hamza ou madda (إ أ آ) → alef (ا), alef maqsura
/// (ى) → ya (ي), ta marbuta (ة) → ha (ه).
///
/// A operação é idempotente: normalizar uma palavra já normalizada devolve
/// a mesma palavra.
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'إ' | 'أ' | 'آ' => 'ا',
            'ى' => 'ي',
            'ة' => 'ه',
            other => other,
        })
        .collect()
}

//! # Registro de Token (`Datum`)
//!
//! O tipo de dado que flui por todo o pipeline: um par (palavra, label)
//! lido do corpus, enriquecido depois pela expansão com o label anterior
//! e a sequência de features calculadas.

use serde::{Deserialize, Serialize};

/// Label sentinela de início de sequência ("Outside", fora de entidade).
///
/// É o `previous_label` da posição 0, onde ainda não existe label
/// verdadeiro anterior.
pub const OUTSIDE_LABEL: &str = "O";

/// Um registro de token anotado.
///
/// `word` e `label` são definidos na criação e não mudam depois.
/// `previous_label` e `features` ficam vazios até que um dos expansores
/// ([`crate::expand::expand_train`] ou [`crate::expand::expand_test`])
/// produza a versão enriquecida. Os expansores nunca alteram o registro
/// de entrada, sempre devolvem registros novos.
///
/// Um `Datum` não tem identidade própria: ele é endereçado pela posição
/// na sequência a que pertence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datum {
    /// O token bruto, exatamente como apareceu no corpus.
    pub word: String,
    /// O label verdadeiro anotado no corpus (ex: "PER", "LOC", "O").
    pub label: String,
    /// Label da posição anterior na cadeia de contexto.
    /// `None` antes da expansão; [`OUTSIDE_LABEL`] na posição 0.
    pub previous_label: Option<String>,
    /// Sequência ordenada de features `nome=valor`.
    ///
    /// Strings duplicadas são legais e preservadas; se duplicatas
    /// reforçam peso é uma decisão do modelo consumidor, não deste crate.
    pub features: Vec<String>,
}

impl Datum {
    /// Cria um registro cru, ainda sem label anterior nem features.
    pub fn new(word: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            label: label.into(),
            previous_label: None,
            features: Vec::new(),
        }
    }
}

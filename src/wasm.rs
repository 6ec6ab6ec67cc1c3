//! WASM bindings for Voxgram.
//!
//! This module provides JavaScript-friendly bindings for compiling grammars
//! in the browser, where the phonetic lookup list is supplied as text and the
//! results are returned as strings instead of files.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmGrammarCompiler } from 'voxgram';
//!
//! await init();
//!
//! const compiler = new WasmGrammarCompiler(lookupListText);
//! const result = compiler.compile(
//!   '{"OneOfTheseWillBeSaidOnce": ["GO", "STOP"]}',
//!   'commands',
//! );
//! console.log(result.grammar, result.dictionary);
//! ```

use wasm_bindgen::prelude::*;

use crate::compiler::GrammarCompiler;
use crate::error::GrammarError;
use crate::phonetics::PhoneticTable;
use crate::rules;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Grammar compiler holding a phonetic table.
#[wasm_bindgen]
pub struct WasmGrammarCompiler {
    table: PhoneticTable,
}

/// Grammar and dictionary text produced by [`WasmGrammarCompiler::compile`].
#[wasm_bindgen]
pub struct WasmCompiledGrammar {
    grammar: String,
    dictionary: String,
}

#[wasm_bindgen]
impl WasmCompiledGrammar {
    /// JSGF grammar text.
    #[wasm_bindgen(getter)]
    pub fn grammar(&self) -> String {
        self.grammar.clone()
    }

    /// Pronunciation dictionary text.
    #[wasm_bindgen(getter)]
    pub fn dictionary(&self) -> String {
        self.dictionary.clone()
    }
}

#[wasm_bindgen]
impl WasmGrammarCompiler {
    /// Create a compiler from the text of a phonetic lookup list.
    ///
    /// # Example
    /// ```javascript
    /// const compiler = new WasmGrammarCompiler("GO\tG OW\nSTOP\tS T AA P\n");
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(lookup_list: &str) -> Result<WasmGrammarCompiler, JsValue> {
        let table = PhoneticTable::parse(lookup_list, "<lookup list>").map_err(to_js)?;
        if table.is_empty() {
            return Err(to_js(GrammarError::WasmError {
                message: "lookup list contains no words".to_string(),
            }));
        }
        Ok(Self { table })
    }

    /// Number of words in the phonetic table.
    #[wasm_bindgen(getter)]
    pub fn word_count(&self) -> usize {
        self.table.len()
    }

    /// Compile a JSON rule specification into grammar and dictionary text.
    #[wasm_bindgen]
    pub fn compile(&self, spec: &str, rule_name: &str) -> Result<WasmCompiledGrammar, JsValue> {
        let tree = rules::parse(spec).map_err(to_js)?;
        let compiled = GrammarCompiler::new(&self.table)
            .compile(&tree, rule_name)
            .map_err(to_js)?;
        Ok(WasmCompiledGrammar {
            grammar: compiled.grammar_text,
            dictionary: compiled.dictionary_text,
        })
    }

    /// Check whether `utterance` is matched by the rule specification.
    #[wasm_bindgen]
    pub fn accepts(&self, spec: &str, utterance: &str) -> Result<bool, JsValue> {
        let tree = rules::parse(spec).map_err(to_js)?;
        Ok(crate::grammar::Expansion::from_group(&tree).accepts(utterance))
    }
}

fn to_js(err: GrammarError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

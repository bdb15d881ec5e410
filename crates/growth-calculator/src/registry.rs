use crate::plugin::GrowthFunction;
use std::collections::HashMap;

/// Growth functions in registration order, indexed by label.
pub struct FunctionRegistry {
    functions: Vec<Box<dyn GrowthFunction>>,
    by_label: HashMap<String, usize>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
            by_label: HashMap::new(),
        }
    }

    /// Registers a function. Re-registering a label replaces the earlier
    /// function but keeps its position.
    pub fn register(&mut self, function: Box<dyn GrowthFunction>) {
        let label = function.label().to_string();
        match self.by_label.get(&label) {
            Some(&slot) => self.functions[slot] = function,
            None => {
                self.by_label.insert(label, self.functions.len());
                self.functions.push(function);
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&dyn GrowthFunction> {
        self.by_label
            .get(label)
            .map(|&slot| self.functions[slot].as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn GrowthFunction> {
        self.functions.iter().map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

//! Template evaluation with prompt composition.
//!
//! The resolver walks a template's segments in order. Literals are copied,
//! variables are looked up in the [`Arguments`], and prompt references are
//! resolved through a [`PromptLookup`] and rendered recursively with the same
//! arguments.
//!
//! Composition is a depth-first walk over prompt names. A per-call stack of
//! the names currently being rendered makes cycle detection exact: reaching a
//! name that is already on the stack fails with `CyclicReference`. A separate
//! depth limit turns long acyclic chains into `RecursionLimitExceeded`.

use super::lookup::PromptLookup;
use super::placeholder::Placeholder;
use super::scanner::Segment;
use super::{Arguments, RenderError, Template};
use tracing::{debug, trace};

/// Default limit on nested prompt references.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Per-call resolution state.
#[derive(Debug)]
struct RenderContext {
    /// Prompt names currently being rendered, outermost first.
    stack: Vec<String>,
    /// Number of stack entries that do not count toward depth.
    root: usize,
    max_depth: usize,
}

impl RenderContext {
    fn new(max_depth: usize) -> Self {
        Self {
            stack: Vec::new(),
            root: 0,
            max_depth,
        }
    }

    /// Context for rendering the stored prompt `name` itself.
    fn rooted(name: &str, max_depth: usize) -> Self {
        Self {
            stack: vec![name.to_string()],
            root: 1,
            max_depth,
        }
    }

    fn depth(&self) -> usize {
        self.stack.len() - self.root
    }

    fn enter(&mut self, name: &str) -> Result<(), RenderError> {
        if self.stack.iter().any(|active| active == name) {
            let mut path = self.stack.clone();
            path.push(name.to_string());
            return Err(RenderError::CyclicReference(path));
        }

        if self.depth() >= self.max_depth {
            return Err(RenderError::RecursionLimitExceeded {
                limit: self.max_depth,
            });
        }

        self.stack.push(name.to_string());
        Ok(())
    }

    fn exit(&mut self) {
        self.stack.pop();
    }
}

/// Renders templates against a prompt lookup.
///
/// A `Renderer` holds no per-render state, so one instance can serve any
/// number of render calls (from several threads if the lookup is `Sync`).
#[derive(Debug)]
pub struct Renderer<'l, L: PromptLookup + ?Sized> {
    lookup: &'l L,
    max_depth: usize,
}

impl<'l, L: PromptLookup + ?Sized> Renderer<'l, L> {
    /// Create a renderer with the default depth limit.
    pub fn new(lookup: &'l L) -> Self {
        Self {
            lookup,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum number of nested prompt references.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The depth limit in effect.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render raw template text.
    ///
    /// Output is all-or-nothing: on error nothing rendered so far is returned.
    pub fn render(&self, template: &str, args: &Arguments) -> Result<String, RenderError> {
        let mut context = RenderContext::new(self.max_depth);
        let mut output = String::with_capacity(template.len());
        self.render_into(template, args, &mut context, &mut output)?;
        Ok(output)
    }

    /// Render the stored prompt `name`.
    ///
    /// The prompt itself is the root of the resolution stack, so a prompt
    /// that includes itself fails with `CyclicReference([name, name])`. The
    /// root does not count toward the depth limit.
    pub fn render_prompt(&self, name: &str, args: &Arguments) -> Result<String, RenderError> {
        let template = self
            .lookup
            .resolve(name)
            .ok_or_else(|| RenderError::PromptNotFound(name.to_string()))?;

        let mut context = RenderContext::rooted(name, self.max_depth);
        let mut output = String::with_capacity(template.len());
        self.render_into(template, args, &mut context, &mut output)?;
        Ok(output)
    }

    fn render_into(
        &self,
        source: &str,
        args: &Arguments,
        context: &mut RenderContext,
        output: &mut String,
    ) -> Result<(), RenderError> {
        let template = Template::parse(source)?;

        for segment in template.segments() {
            match *segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(Placeholder::EscapedLiteral(text)) => {
                    output.push_str("{{");
                    output.push_str(text);
                    output.push_str("}}");
                }
                Segment::Placeholder(Placeholder::Variable(name)) => {
                    output.push_str(args.get(name)?);
                }
                Segment::Placeholder(Placeholder::PromptRef(name)) => {
                    self.compose(name, args, context, output)?;
                }
                Segment::Placeholder(Placeholder::PromptVarRef(variable)) => {
                    let name = args.get(variable)?;
                    trace!(variable, prompt = name, "resolved dynamic prompt reference");
                    self.compose(name, args, context, output)?;
                }
            }
        }

        Ok(())
    }

    /// Render the prompt `name` in place, guarding against cycles and depth.
    fn compose(
        &self,
        name: &str,
        args: &Arguments,
        context: &mut RenderContext,
        output: &mut String,
    ) -> Result<(), RenderError> {
        context.enter(name)?;
        debug!(prompt = name, depth = context.depth(), "composing prompt");

        let template = self
            .lookup
            .resolve(name)
            .ok_or_else(|| RenderError::PromptNotFound(name.to_string()))?;
        self.render_into(template, args, context, output)?;

        context.exit();
        debug!(prompt = name, "finished composing prompt");
        Ok(())
    }
}

/// Render raw template text with the default depth limit.
///
/// This is the main entry point for callers that do not need to configure
/// the renderer.
pub fn render<L: PromptLookup + ?Sized>(
    template: &str,
    args: &Arguments,
    lookup: &L,
) -> Result<String, RenderError> {
    Renderer::new(lookup).render(template, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_detects_repeat() {
        let mut context = RenderContext::new(10);
        context.enter("a").unwrap();
        context.enter("b").unwrap();
        assert_eq!(
            context.enter("a"),
            Err(RenderError::CyclicReference(vec![
                "a".to_string(),
                "b".to_string(),
                "a".to_string()
            ]))
        );
    }

    #[test]
    fn context_exit_allows_reentry() {
        let mut context = RenderContext::new(10);
        context.enter("a").unwrap();
        context.exit();
        assert!(context.enter("a").is_ok());
    }

    #[test]
    fn rooted_context_does_not_count_root() {
        let mut context = RenderContext::rooted("root", 1);
        assert_eq!(context.depth(), 0);
        context.enter("child").unwrap();
        assert_eq!(
            context.enter("grandchild"),
            Err(RenderError::RecursionLimitExceeded { limit: 1 })
        );
    }

    #[test]
    fn cycle_is_reported_before_depth() {
        let mut context = RenderContext::rooted("a", 0);
        assert_eq!(
            context.enter("a"),
            Err(RenderError::CyclicReference(vec![
                "a".to_string(),
                "a".to_string()
            ]))
        );
    }

    #[test]
    fn renderer_defaults() {
        let lookup = std::collections::HashMap::<String, String>::new();
        let renderer = Renderer::new(&lookup);
        assert_eq!(renderer.max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(renderer.with_max_depth(7).max_depth(), 7);
    }
}

//! W3C trace-context propagation into message attributes.
//!
//! Encodes the active trace context as a single `traceparent` entry
//! (`version-traceid-spanid-flags`, fixed-width lowercase hex) on the
//! envelope's attribute map, and decodes it back on the consuming side.

use opentelemetry::propagation::{Extractor, Injector, TextMapPropagator};
use opentelemetry::Context;
use opentelemetry_sdk::propagation::TraceContextPropagator;

use crate::publish::envelope::{AttributeValue, MessageAttributes};

/// Attribute key carrying the encoded trace context.
pub const TRACEPARENT: &str = "traceparent";

/// Carrier writing propagation entries into envelope attributes.
///
/// Every injected value is typed `String` on the wire.
pub struct AttributeInjector<'a>(pub &'a mut MessageAttributes);

impl Injector for AttributeInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), AttributeValue::string(value));
    }
}

/// Carrier reading propagation entries from envelope attributes.
pub struct AttributeExtractor<'a>(pub &'a MessageAttributes);

impl Extractor for AttributeExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|attr| attr.value.as_str())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// Write the trace context of `cx` into `attributes` under [`TRACEPARENT`].
///
/// Existing unrelated keys are left untouched. A context without a valid
/// span injects nothing.
pub fn inject_context(cx: &Context, attributes: &mut MessageAttributes) {
    TraceContextPropagator::new().inject_context(cx, &mut AttributeInjector(attributes));
}

/// Read a trace context back out of `attributes`.
///
/// A missing or malformed `traceparent` yields a context whose span context
/// is invalid, never an error.
pub fn extract_context(attributes: &MessageAttributes) -> Context {
    TraceContextPropagator::new().extract(&AttributeExtractor(attributes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{
        SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
    };

    fn remote_context() -> Context {
        let span_context = SpanContext::new(
            TraceId::from_hex("0af7651916cd43dd8448eb211c80319c").unwrap(),
            SpanId::from_hex("b7ad6b7169203331").unwrap(),
            TraceFlags::SAMPLED,
            false,
            TraceState::default(),
        );
        Context::new().with_remote_span_context(span_context)
    }

    #[test]
    fn inject_writes_w3c_traceparent() {
        let mut attributes = MessageAttributes::new();
        inject_context(&remote_context(), &mut attributes);

        let traceparent = attributes.get(TRACEPARENT).expect("traceparent entry");
        assert_eq!(
            traceparent.value,
            "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01"
        );
        assert_eq!(traceparent.data_type, "String");
    }

    #[test]
    fn inject_leaves_other_keys_untouched() {
        let mut attributes = MessageAttributes::new();
        attributes.insert("tenant".to_string(), AttributeValue::string("alpha"));

        inject_context(&remote_context(), &mut attributes);

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("tenant").unwrap().value, "alpha");
    }

    #[test]
    fn inject_is_idempotent_for_the_same_context() {
        let cx = remote_context();
        let mut attributes = MessageAttributes::new();
        inject_context(&cx, &mut attributes);
        let first = attributes.get(TRACEPARENT).unwrap().clone();

        inject_context(&cx, &mut attributes);

        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get(TRACEPARENT).unwrap(), &first);
    }

    #[test]
    fn inject_without_a_span_writes_nothing() {
        let mut attributes = MessageAttributes::new();
        inject_context(&Context::new(), &mut attributes);
        assert!(attributes.is_empty());
    }

    #[test]
    fn roundtrip_preserves_trace_id_span_id_and_flags() {
        let cx = remote_context();
        let mut attributes = MessageAttributes::new();
        inject_context(&cx, &mut attributes);

        let extracted = extract_context(&attributes);
        let extracted_binding = extracted.span();
        let extracted_span = extracted_binding.span_context();
        let original_binding = cx.span();
        let original_span = original_binding.span_context();

        assert_eq!(extracted_span.trace_id(), original_span.trace_id());
        assert_eq!(extracted_span.span_id(), original_span.span_id());
        assert_eq!(extracted_span.trace_flags(), original_span.trace_flags());
    }

    #[test]
    fn extract_of_empty_attributes_yields_no_context() {
        let attributes = MessageAttributes::new();
        let extracted = extract_context(&attributes);
        assert!(!extracted.span().span_context().is_valid());
    }

    #[test]
    fn extract_of_malformed_traceparent_yields_no_context() {
        let mut attributes = MessageAttributes::new();
        attributes.insert(
            TRACEPARENT.to_string(),
            AttributeValue::string("not-a-traceparent"),
        );
        let extracted = extract_context(&attributes);
        assert!(!extracted.span().span_context().is_valid());
    }
}

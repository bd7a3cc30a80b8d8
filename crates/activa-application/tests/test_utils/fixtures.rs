//! Fixture components and the module declaring them

use std::sync::Arc;

use activa_domain::entities::{
    Capability, CapabilityDescriptor, Component, MemberSignature, ModuleDescriptor, Object,
    ParameterDescriptor, PropertyDescriptor, RoleDescriptor, TypeDescriptor,
};
use activa_domain::error::{Error, Result};
use activa_domain::ports::{
    ActivationContext, ActivationProvider, ExceptionHandler, PropertyActivationProvider,
};
use activa_domain::value_objects::{TypeName, Value, ValueType};

use super::RecordingHandler;

pub const NS: &str = "urn:test";

pub fn name(local: &str) -> TypeName {
    TypeName::new(NS, local)
}

pub trait Color: Send + Sync {
    fn name(&self) -> String;
    fn intensity(&self) -> i64;
}

impl Capability for dyn Color {
    fn capability_name() -> TypeName {
        name("IColor")
    }
}

pub fn color_name() -> TypeName {
    <dyn Color as Capability>::capability_name()
}

/// Capability view over any object exposing the color members
struct ObjectColor(Object);

impl Color for ObjectColor {
    fn name(&self) -> String {
        self.0
            .invoke("name", &[])
            .ok()
            .and_then(Value::into_text)
            .unwrap_or_default()
    }

    fn intensity(&self) -> i64 {
        self.0
            .invoke("intensity", &[])
            .ok()
            .and_then(|value| value.as_i64())
            .unwrap_or_default()
    }
}

pub struct Red;

impl Color for Red {
    fn name(&self) -> String {
        "red".to_string()
    }

    fn intensity(&self) -> i64 {
        255
    }
}

/// Has `name` but not `intensity`
pub struct Paint;

/// Has both color members without declaring the capability
pub struct Crayon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

pub struct Widget {
    pub count: i64,
    pub color: Option<Arc<dyn Color>>,
    pub constructor: &'static str,
    pub label: String,
    pub enabled: bool,
    pub shade: Shade,
    pub trail: Vec<String>,
}

impl Widget {
    pub fn new(count: i64, color: Option<Arc<dyn Color>>, constructor: &'static str) -> Self {
        Self {
            count,
            color,
            constructor,
            label: String::new(),
            enabled: false,
            shade: Shade::Light,
            trail: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct Gadget {
    pub trail: Vec<String>,
}

pub struct RedBuilder {
    pub source: Object,
}

pub struct RedPrinter;
pub struct BrokenPrinter;
pub struct WidgetActivationProvider;

/// Appends its name to the trail of widgets and gadgets
pub struct RecordHook(pub &'static str);

fn record(component: &mut dyn Component, entry: &str) {
    if let Some(widget) = component.downcast_mut::<Widget>() {
        widget.trail.push(entry.to_string());
    } else if let Some(gadget) = component.downcast_mut::<Gadget>() {
        gadget.trail.push(entry.to_string());
    }
}

impl ActivationProvider for RecordHook {
    fn name(&self) -> &str {
        self.0
    }

    fn activate(&self, component: &mut dyn Component, _: &ActivationContext<'_>) -> Result<()> {
        record(component, self.0);
        Ok(())
    }
}

impl ActivationProvider for WidgetActivationProvider {
    fn activate(&self, component: &mut dyn Component, _: &ActivationContext<'_>) -> Result<()> {
        record(component, "adapter");
        Ok(())
    }
}

pub struct FailingHook;

impl ActivationProvider for FailingHook {
    fn name(&self) -> &str {
        "failing"
    }

    fn activate(&self, _: &mut dyn Component, _: &ActivationContext<'_>) -> Result<()> {
        Err(Error::internal("hook failed"))
    }
}

/// Upper-cases the widget label
pub struct UppercaseLabel;

impl PropertyActivationProvider for UppercaseLabel {
    fn name(&self) -> &str {
        "uppercase-label"
    }

    fn activate_property(
        &self,
        component: &mut dyn Component,
        property: &PropertyDescriptor,
        _: &ActivationContext<'_>,
    ) -> Result<()> {
        if let Some(widget) = component.downcast_mut::<Widget>() {
            widget.label = widget.label.to_uppercase();
            widget.trail.push(format!("property:{}", property.name()));
        }
        Ok(())
    }
}

pub fn red_descriptor() -> TypeDescriptor {
    TypeDescriptor::class::<Red>(name("Red"))
        .constructor(vec![], |_| Ok(Red))
        .method("name", vec![], ValueType::Text, |red: &Red, _| {
            Ok(Value::Text(red.name()))
        })
        .method("intensity", vec![], ValueType::Int, |red: &Red, _| {
            Ok(Value::Int(red.intensity()))
        })
        .implements::<dyn Color, _>(|red| red as Arc<dyn Color>)
        .build()
}

/// Red as a standalone object, for field providers
pub fn red_object() -> Object {
    Object::wrap(Arc::new(red_descriptor()), Red).expect("descriptor describes Red")
}

fn color_param(param: &str) -> ParameterDescriptor {
    ParameterDescriptor::new(param, ValueType::object(color_name()))
}

fn widget_descriptor() -> TypeDescriptor {
    TypeDescriptor::class::<Widget>(name("Widget"))
        .constructor(
            vec![ParameterDescriptor::new("count", ValueType::Int)],
            |args| Ok(Widget::new(args.int(0)?, None, "count")),
        )
        .preferred_constructor(
            vec![
                ParameterDescriptor::new("count", ValueType::Int),
                color_param("color"),
            ],
            |args| {
                Ok(Widget::new(
                    args.int(0)?,
                    Some(args.capability::<dyn Color>(1)?),
                    "count+color",
                ))
            },
        )
        .property("Label", ValueType::Text, |widget: &mut Widget, value| {
            widget.label = value.into_text().unwrap_or_default();
            Ok(())
        })
        .property("Enabled", ValueType::Bool, |widget: &mut Widget, value| {
            widget.enabled = value
                .as_bool()
                .ok_or_else(|| Error::conversion("Enabled", "expected bool"))?;
            Ok(())
        })
        .property(
            "Shade",
            ValueType::Enum(name("Shade")),
            |widget: &mut Widget, value| {
                let shade = value
                    .as_object()
                    .and_then(|object| object.downcast_ref::<Shade>().copied())
                    .ok_or_else(|| Error::conversion("Shade", "expected a shade"))?;
                widget.shade = shade;
                Ok(())
            },
        )
        .property_hook("label", Arc::new(UppercaseLabel))
        .implements_name(name("ITracked"), None)
        .activation_provider(Arc::new(RecordHook("type")))
        .build()
}

fn shade_descriptor() -> TypeDescriptor {
    TypeDescriptor::enumeration::<Shade>(name("Shade"))
        .parse_with(|text| match text.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Shade::Light),
            "dark" => Ok(Shade::Dark),
            other => Err(Error::conversion("Shade", format!("unknown shade '{other}'"))),
        })
        .default_with(|| Shade::Light)
        .build()
}

/// Standard fixture module
pub fn fixture_module() -> ModuleDescriptor {
    ModuleDescriptor::new("fixtures")
        .with_capability(
            CapabilityDescriptor::of::<dyn Color>()
                .member("name", vec![], ValueType::Text)
                .member("intensity", vec![], ValueType::Int)
                .bridge::<dyn Color, _>(|object| Arc::new(ObjectColor(object)) as Arc<dyn Color>),
        )
        .with_capability(
            CapabilityDescriptor::new(name("ITracked"))
                .activation_provider(Arc::new(RecordHook("capability"))),
        )
        .with_capability(
            CapabilityDescriptor::new(name("IPoint"))
                .member("x", vec![], ValueType::Int)
                .value_type(),
        )
        .with_role(
            RoleDescriptor::new("Printer")
                .expect_method(MemberSignature::new("print", vec![], ValueType::Text)),
        )
        .with_type(red_descriptor())
        .with_type(
            TypeDescriptor::class::<Paint>(name("Paint"))
                .constructor(vec![], |_| Ok(Paint))
                .method("name", vec![], ValueType::Text, |_, _| Ok(Value::from("paint")))
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<Crayon>(name("Crayon"))
                .constructor(vec![], |_| Ok(Crayon))
                .method("name", vec![], ValueType::Text, |_, _| Ok(Value::from("crayon")))
                .method("intensity", vec![], ValueType::Int, |_, _| Ok(Value::Int(7)))
                .build(),
        )
        .with_type(shade_descriptor())
        .with_type(widget_descriptor())
        .with_type(
            TypeDescriptor::class::<WidgetActivationProvider>(name("WidgetActivationProvider"))
                .constructor(vec![], |_| Ok(WidgetActivationProvider))
                .implements::<dyn ActivationProvider, _>(|hook| hook as Arc<dyn ActivationProvider>)
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<Gadget>(name("Gadget"))
                .constructor(vec![], |_| Ok(Gadget::default()))
                .activation_provider(Arc::new(RecordHook("before")))
                .activation_provider(Arc::new(FailingHook))
                .activation_provider(Arc::new(RecordHook("after")))
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<RedBuilder>(name("RedBuilder"))
                .constructor(
                    vec![ParameterDescriptor::new("source", ValueType::object(name("Red")))],
                    |args| Ok(RedBuilder { source: args.object(0)? }),
                )
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<RedPrinter>(name("RedPrinter"))
                .constructor(vec![], |_| Ok(RedPrinter))
                .method("print", vec![], ValueType::Text, |_, _| Ok(Value::from("printed")))
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<BrokenPrinter>(name("BrokenPrinter"))
                .constructor(vec![], |_| Ok(BrokenPrinter))
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<RecordingHandler>(name("RecordingHandler"))
                .constructor(vec![], |_| Ok(RecordingHandler::default()))
                .implements::<dyn ExceptionHandler, _>(|handler| {
                    handler as Arc<dyn ExceptionHandler>
                })
                .build(),
        )
        .with_type(
            TypeDescriptor::abstract_type(name("AbstractColor"))
                .concrete(name("Red"))
                .build(),
        )
        .with_type(TypeDescriptor::abstract_type(name("Shapeless")).build())
        .with_type(
            TypeDescriptor::abstract_type(name("Loop"))
                .concrete(name("LoopBack"))
                .build(),
        )
        .with_type(
            TypeDescriptor::abstract_type(name("LoopBack"))
                .concrete(name("Loop"))
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<Paint>(name("Ghost"))
                .preferred_factory("vanish", vec![], |_| Ok(None))
                .build(),
        )
        .bind_role(name("Red"), "Printer", name("BrokenPrinter"))
        .bind_role(name("Red"), "Printer", name("RedPrinter"))
}

/// Implements `ISolid`, which extends `IShape`
pub struct Cube;

/// Takes any `IShape` as its only argument
pub struct Sculptor {
    pub shape: Object,
}

pub fn shape_name() -> TypeName {
    name("IShape")
}

pub fn solid_name() -> TypeName {
    name("ISolid")
}

/// Capability inheritance: `ISolid` extends `IShape`
pub fn lineage_module() -> ModuleDescriptor {
    ModuleDescriptor::new("lineage")
        .with_capability(
            CapabilityDescriptor::new(shape_name()).member("area", vec![], ValueType::Int),
        )
        .with_capability(
            CapabilityDescriptor::new(solid_name())
                .base(shape_name())
                .member("volume", vec![], ValueType::Int),
        )
        .with_type(
            TypeDescriptor::class::<Cube>(name("Cube"))
                .constructor(vec![], |_| Ok(Cube))
                .method("area", vec![], ValueType::Int, |_, _| Ok(Value::Int(6)))
                .method("volume", vec![], ValueType::Int, |_, _| Ok(Value::Int(1)))
                .implements_name(solid_name(), None)
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<Sculptor>(name("Sculptor"))
                .constructor(
                    vec![ParameterDescriptor::new("shape", ValueType::object(shape_name()))],
                    |args| Ok(Sculptor { shape: args.object(0)? }),
                )
                .build(),
        )
}

use std::any::Any;

use crate::error;

/// Runtime type information for message values.
///
/// Every `'static` type is a message. To store a family of message types
/// behind a common base trait, make `Message` a supertrait of the base:
///
/// ```
/// use msgvec_core::Message;
///
/// trait Shape: Message {
///     fn sides(&self) -> u32;
/// }
/// ```
///
/// `dyn Shape` is then a `Message` too, and a reference to it can be
/// checked against a concrete type.
pub trait Message: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// The name of the concrete type behind this value.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> Message for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A derived message type that can be viewed as its base `B`.
///
/// Every type is its own base. For trait bases use the [`upcast!`](crate::upcast)
/// macro.
pub trait Upcast<B: ?Sized> {
    fn upcast(&self) -> &B;

    fn upcast_mut(&mut self) -> &mut B;
}

impl<T> Upcast<T> for T {
    #[inline]
    fn upcast(&self) -> &T {
        self
    }

    #[inline]
    fn upcast_mut(&mut self) -> &mut T {
        self
    }
}

/// Declare that one or more types can be viewed as `dyn Base`.
///
/// ```
/// use msgvec_core::{upcast, Message, Upcast};
///
/// trait Shape: Message {
///     fn sides(&self) -> u32;
/// }
///
/// struct Square;
///
/// impl Shape for Square {
///     fn sides(&self) -> u32 {
///         4
///     }
/// }
///
/// upcast!(Shape => Square);
///
/// let square = Square;
/// let shape: &dyn Shape = Upcast::<dyn Shape>::upcast(&square);
/// assert_eq!(shape.sides(), 4);
/// ```
#[macro_export]
macro_rules! upcast {
    ($base:ident => $($derived:ty),+ $(,)?) => {
        $(
            impl $crate::Upcast<dyn $base> for $derived {
                #[inline]
                fn upcast(&self) -> &(dyn $base + 'static) {
                    self
                }

                #[inline]
                fn upcast_mut(&mut self) -> &mut (dyn $base + 'static) {
                    self
                }
            }
        )+
    };
}

/// Narrow a base reference to the concrete type `D`.
pub(crate) fn downcast_ref<B, D>(element: &B) -> error::Result<&D>
where
    B: ?Sized + Message,
    D: Any,
{
    <B as Message>::as_any(element)
        .downcast_ref::<D>()
        .ok_or_else(|| error::Error::type_mismatch::<D>(<B as Message>::type_name(element)))
}

/// Narrow a boxed base value to the concrete type `D`, taking ownership.
pub(crate) fn downcast_box<B, D>(element: Box<B>) -> error::Result<D>
where
    B: ?Sized + Message,
    D: Any,
{
    let found = <B as Message>::type_name(&*element);
    match <B as Message>::into_any(element).downcast::<D>() {
        Ok(element) => Ok(*element),
        Err(_) => Err(error::Error::type_mismatch::<D>(found)),
    }
}

use emmygen_gen::Generator;
use emmygen_model::{
    Access, CtorDef, EnumMemberDef, FieldDef, GenericParamDef, GenericParamOwner, MethodDef,
    ParamDef, PropertyDef, ScalarKind, SpecialShape, TypeDef, TypeId, TypeKind, TypeStore,
};
use pretty_assertions::assert_eq;

struct Fixture {
    store: TypeStore,
    object: TypeId,
    void: TypeId,
    int: TypeId,
    string: TypeId,
    boolean: TypeId,
}

fn fixture() -> Fixture {
    let mut store = TypeStore::new();
    let mut object = TypeDef::new("Object", TypeKind::Ordinary);
    object.namespace = Some("System".into());
    object.is_class = true;
    let object = store.add_type(object);
    store.set_object(object);
    let void = store.add_type(TypeDef::new("Void", TypeKind::Void));
    let int = scalar(&mut store, "Int32", ScalarKind::Integer);
    let string = scalar(&mut store, "String", ScalarKind::Str);
    let boolean = scalar(&mut store, "Boolean", ScalarKind::Boolean);
    Fixture {
        store,
        object,
        void,
        int,
        string,
        boolean,
    }
}

fn scalar(store: &mut TypeStore, name: &str, kind: ScalarKind) -> TypeId {
    let mut def = TypeDef::new(name, TypeKind::Scalar { scalar: kind });
    def.namespace = Some("System".into());
    store.add_type(def)
}

fn param(name: &str, ty: TypeId) -> ParamDef {
    ParamDef {
        name: Some(name.into()),
        ty,
        optional: false,
        variadic: false,
    }
}

fn method(name: &str, return_type: TypeId, params: Vec<ParamDef>) -> MethodDef {
    MethodDef {
        name: name.into(),
        access: Access::Public,
        is_static: false,
        is_compiler_generated: false,
        is_special_name: false,
        has_async_marker: false,
        return_type,
        params,
        generic_params: Vec::new(),
    }
}

fn field(name: &str, ty: TypeId) -> FieldDef {
    FieldDef {
        name: name.into(),
        ty,
        access: Access::Public,
        is_static: false,
        is_compiler_generated: false,
        is_special_name: false,
    }
}

fn property(name: &str, ty: TypeId) -> PropertyDef {
    PropertyDef {
        name: name.into(),
        ty,
        access: Access::Public,
        index_params: Vec::new(),
        is_compiler_generated: false,
        overrides_base: false,
    }
}

#[test]
fn class_with_members_renders_completely() {
    let mut fx = fixture();

    let mut disposable = TypeDef::new("IDisposable", TypeKind::Ordinary);
    disposable.namespace = Some("System".into());
    disposable.is_interface = true;
    let disposable = fx.store.add_type(disposable);

    let mut entity = TypeDef::new("Entity", TypeKind::Ordinary);
    entity.namespace = Some("Game".into());
    entity.is_class = true;
    entity.base = Some(fx.object);
    entity.properties.push(property("Name", fx.string));
    let entity = fx.store.add_type(entity);

    let mut actor = TypeDef::new("Actor", TypeKind::Ordinary);
    actor.namespace = Some("Game".into());
    actor.is_class = true;
    actor.base = Some(entity);
    actor.interfaces.push(disposable);
    actor.fields.push(field("hp", fx.int));
    actor.properties.push(property("Name", fx.string));
    actor
        .methods
        .push(method("Damage", fx.void, vec![param("amount", fx.int)]));
    actor.methods.push(method(
        "Damage",
        fx.void,
        vec![param("amount", fx.int), param("crit", fx.boolean)],
    ));
    let actor_id = TypeId::new(fx.store.len() as u32);
    let mut spawn = method("Spawn", actor_id, Vec::new());
    spawn.is_static = true;
    actor.methods.push(spawn);
    let mut accessor = method("get_Name", fx.string, Vec::new());
    accessor.is_special_name = true;
    actor.methods.push(accessor);
    actor.constructors.push(CtorDef {
        access: Access::Public,
        params: Vec::new(),
    });
    actor.constructors.push(CtorDef {
        access: Access::Public,
        params: vec![param("name", fx.string)],
    });
    let actor = fx.store.add_type(actor);
    assert_eq!(actor, actor_id);
    fx.store.validate().unwrap();

    let generator = Generator::new(&fx.store);
    let decl = generator.generate(actor).unwrap();

    assert_eq!(decl.qualified_name, "Game.Actor");
    assert_eq!(decl.namespace.as_deref(), Some("Game"));
    assert_eq!(
        decl.text,
        "---@class Game.Actor: Game.Entity, System.IDisposable\n\
         ---@field Name string\n\
         ---@field hp integer\n\
         CS.Game.Actor = {}\n\
         \n\
         ---@overload fun(self: self, amount: integer, crit: boolean)\n\
         ---@param amount integer\n\
         function CS.Game.Actor:Damage(amount) end\n\
         \n\
         ---@return Game.Actor\n\
         function CS.Game.Actor.Spawn() end\n\
         \n\
         ---@overload fun(name: string): Game.Actor\n\
         ---@return Game.Actor\n\
         function CS.Game.Actor() end\n"
    );
}

#[test]
fn enum_renders_members_in_declaration_order() {
    let mut fx = fixture();
    let mut color = TypeDef::new(
        "Color",
        TypeKind::Enum {
            members: vec![
                EnumMemberDef {
                    name: "Red".into(),
                    value: 0,
                },
                EnumMemberDef {
                    name: "Green".into(),
                    value: 1,
                },
                EnumMemberDef {
                    name: "Blue".into(),
                    value: 2,
                },
            ],
        },
    );
    color.namespace = Some("Game".into());
    let color = fx.store.add_type(color);
    fx.store.validate().unwrap();

    let generator = Generator::new(&fx.store);
    let decl = generator.generate(color).unwrap();
    assert_eq!(
        decl.text,
        "---@enum Game.Color\nCS.Game.Color = {\n    Red = 0,\n    Green = 1,\n    Blue = 2\n}\n"
    );
}

#[test]
fn opaque_base_flattens_members_and_hides_overridden_properties() {
    let mut fx = fixture();

    let mut list_def = TypeDef::new("List`1", TypeKind::Ordinary);
    list_def.namespace = Some("System.Collections.Generic".into());
    list_def.is_generic = true;
    let list_def = fx.store.add_type(list_def);

    let mut list_of_int = TypeDef::new(
        "List`1",
        TypeKind::GenericInstance {
            definition: list_def,
            args: vec![fx.int],
        },
    );
    list_of_int.properties.push(property("Count", fx.int));
    list_of_int.properties.push(property("Capacity", fx.int));
    let list_of_int = fx.store.add_type(list_of_int);

    let mut inventory = TypeDef::new("Inventory", TypeKind::Ordinary);
    inventory.namespace = Some("Game".into());
    inventory.is_class = true;
    inventory.base = Some(list_of_int);
    let mut capacity = property("Capacity", fx.int);
    capacity.overrides_base = true;
    inventory.properties.push(capacity);
    let inventory = fx.store.add_type(inventory);
    fx.store.validate().unwrap();

    let generator = Generator::new(&fx.store);
    let decl = generator.generate(inventory).unwrap();
    assert_eq!(
        decl.text,
        "---@class Game.Inventory: userdata\n\
         ---@field Capacity integer\n\
         ---@field Count integer\n\
         CS.Game.Inventory = {}\n\
         \n"
    );
}

#[test]
fn supported_generic_method_gets_generic_lines() {
    let mut fx = fixture();

    let mut component = TypeDef::new("Component", TypeKind::Ordinary);
    component.namespace = Some("Game".into());
    component.is_class = true;
    let component = fx.store.add_type(component);

    let t_param = fx.store.add_type(TypeDef::new(
        "T",
        TypeKind::GenericParam {
            owner: GenericParamOwner::Method,
        },
    ));

    let mut actor = TypeDef::new("Actor", TypeKind::Ordinary);
    actor.namespace = Some("Game".into());
    actor.is_class = true;
    actor.base = Some(fx.object);
    let mut get_component = method("GetComponent", t_param, vec![param("prototype", t_param)]);
    get_component.generic_params.push(GenericParamDef {
        name: "T".into(),
        constraints: vec![component],
        has_reference_constraint: false,
    });
    actor.methods.push(get_component);
    let mut unsupported = method("Make", fx.void, Vec::new());
    unsupported.generic_params.push(GenericParamDef {
        name: "U".into(),
        constraints: Vec::new(),
        has_reference_constraint: true,
    });
    actor.methods.push(unsupported);
    let actor = fx.store.add_type(actor);
    fx.store.validate().unwrap();

    let generator = Generator::new(&fx.store);
    let decl = generator.generate(actor).unwrap();
    assert_eq!(
        decl.text,
        "---@class Game.Actor: System.Object\n\
         CS.Game.Actor = {}\n\
         \n\
         ---@generic T : Game.Component\n\
         ---@param prototype T\n\
         ---@return T\n\
         function CS.Game.Actor:GetComponent(prototype) end\n\
         \n"
    );
}

#[test]
fn awaitable_returning_method_is_async_and_unwrapped() {
    let mut fx = fixture();

    let mut task = TypeDef::new("Task", TypeKind::Ordinary);
    task.namespace = Some("System.Threading.Tasks".into());
    task.is_class = true;
    task.shape = Some(SpecialShape::Awaitable);
    let task = fx.store.add_type(task);

    let mut task_def = TypeDef::new("Task`1", TypeKind::Ordinary);
    task_def.namespace = Some("System.Threading.Tasks".into());
    task_def.is_generic = true;
    task_def.shape = Some(SpecialShape::Awaitable);
    let task_def = fx.store.add_type(task_def);

    let task_of_string = fx.store.add_type(TypeDef::new(
        "Task`1",
        TypeKind::GenericInstance {
            definition: task_def,
            args: vec![fx.string],
        },
    ));

    let mut loader = TypeDef::new("Loader", TypeKind::Ordinary);
    loader.namespace = Some("Game".into());
    loader.is_class = true;
    loader.base = Some(fx.object);
    loader.methods.push(method("Flush", task, Vec::new()));
    loader
        .methods
        .push(method("ReadText", task_of_string, vec![param("path", fx.string)]));
    let loader = fx.store.add_type(loader);
    fx.store.validate().unwrap();

    let generator = Generator::new(&fx.store);
    let decl = generator.generate(loader).unwrap();
    assert_eq!(
        decl.text,
        "---@class Game.Loader: System.Object\n\
         CS.Game.Loader = {}\n\
         \n\
         ---@async\n\
         function CS.Game.Loader:Flush() end\n\
         \n\
         ---@async\n\
         ---@param path string\n\
         ---@return string\n\
         function CS.Game.Loader:ReadText(path) end\n\
         \n"
    );
}

#[test]
fn operators_come_from_declared_special_name_methods() {
    let mut fx = fixture();

    let vec2_id = TypeId::new(fx.store.len() as u32);
    let mut vec2 = TypeDef::new("Vec2", TypeKind::Ordinary);
    vec2.namespace = Some("Game".into());
    vec2.is_class = true;
    vec2.base = Some(fx.object);
    let mut add = method(
        "op_Addition",
        vec2_id,
        vec![param("left", vec2_id), param("right", vec2_id)],
    );
    add.is_special_name = true;
    add.is_static = true;
    vec2.methods.push(add);
    let mut negate = method("op_UnaryNegation", vec2_id, vec![param("value", vec2_id)]);
    negate.is_special_name = true;
    negate.is_static = true;
    vec2.methods.push(negate);
    let mut equality = method(
        "op_Equality",
        fx.boolean,
        vec![param("left", vec2_id), param("right", vec2_id)],
    );
    equality.is_special_name = true;
    equality.is_static = true;
    vec2.methods.push(equality);
    let vec2 = fx.store.add_type(vec2);
    assert_eq!(vec2, vec2_id);
    fx.store.validate().unwrap();

    let generator = Generator::new(&fx.store);
    let decl = generator.generate(vec2).unwrap();
    assert_eq!(
        decl.text,
        "---@class Game.Vec2: System.Object\n\
         ---@operator add(Game.Vec2): Game.Vec2\n\
         ---@operator unm: Game.Vec2\n\
         CS.Game.Vec2 = {}\n\
         \n"
    );
}

#[test]
fn generation_failure_is_contained_per_type() {
    let mut store = TypeStore::new();
    let mut broken = TypeDef::new("Broken", TypeKind::Ordinary);
    broken.base = Some(TypeId::new(0));
    let broken = store.add_type(broken);

    let generator = Generator::new(&store);
    let err = generator.generate(broken).unwrap_err();
    assert_eq!(err.id, broken);
}

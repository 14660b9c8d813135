use minipy::run_program;

fn run_and_capture(source: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_program(source, &mut output) {
        panic!("Script failed: {e}\nSource:\n{source}");
    }
    String::from_utf8(output).expect("interpreter output must be UTF-8")
}

fn assert_output(source: &str, expected: &str) {
    assert_eq!(run_and_capture(source), expected, "for source:\n{source}");
}

fn assert_failure(source: &str) {
    let mut output = Vec::new();
    if run_program(source, &mut output).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}");
    }
}

#[test]
fn hello_world() {
    assert_output("print \"hello\"\n", "hello\n");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 2 + 3 * 4\n", "14\n");
    assert_output("print (1 + 2) * 3\n", "9\n");
    assert_output("print 7 / 2\n", "3\n");
    assert_output("print 10 - 2 - 3\n", "5\n");
    // Multiplying and dividing by the same factor round-trips.
    assert_output("print 7 * 3 / 3\n", "7\n");
}

#[test]
fn variables() {
    assert_output("x = 42\nprint x\n", "42\n");
    assert_output("x = 1\nx = x + 1\nprint x\n", "2\n");
}

#[test]
fn string_concatenation() {
    assert_output("print \"mini\" + \"py\"\n", "minipy\n");
}

#[test]
fn indentation_controls_blocks() {
    let source = "x = 1\n\
                  if x:\n\
                  \x20 print \"a\"\n\
                  print \"b\"\n";
    assert_output(source, "a\nb\n");
}

#[test]
fn if_else_branches() {
    let source = "x = 0\n\
                  if x:\n\
                  \x20 print \"then\"\n\
                  else:\n\
                  \x20 print \"else\"\n";
    assert_output(source, "else\n");
}

#[test]
fn empty_string_is_falsy() {
    let source = "x = \"\"\n\
                  if x:\n\
                  \x20 print \"y\"\n";
    assert_output(source, "");
}

#[test]
fn truthiness_of_values() {
    let source = "if 5:\n\
                  \x20 print \"number\"\n\
                  if \"s\":\n\
                  \x20 print \"string\"\n\
                  if True:\n\
                  \x20 print \"bool\"\n";
    assert_output(source, "number\nstring\nbool\n");
}

#[test]
fn or_short_circuits() {
    // `y` is undefined; a truthy left side must keep it unevaluated.
    let source = "x = 1\n\
                  if x or y:\n\
                  \x20 print \"ok\"\n";
    assert_output(source, "ok\n");
}

#[test]
fn and_always_evaluates_both_sides() {
    // `y` is undefined and the left side is falsy; evaluation still reaches
    // the right side and fails.
    let source = "x = \"\"\n\
                  if x and y:\n\
                  \x20 print \"no\"\n";
    assert_failure(source);
}

#[test]
fn logical_operators_yield_booleans() {
    assert_output("print 1 and 2\n", "True\n");
    assert_output("print 1 and 0\n", "False\n");
    assert_output("print 0 or 3\n", "True\n");
    assert_output("print 0 or 0\n", "False\n");
    assert_output("print not \"\"\n", "True\n");
    assert_output("print not 7\n", "False\n");
    // Double negation is plain truthiness.
    assert_output("print not not 5\n", "True\n");
}

#[test]
fn comparisons_on_primitives() {
    assert_output("print 1 < 2\n", "True\n");
    assert_output("print 2 <= 1\n", "False\n");
    assert_output("print 3 >= 3\n", "True\n");
    assert_output("print 2 > 3\n", "False\n");
    assert_output("print 1 == 1\n", "True\n");
    assert_output("print 1 != 1\n", "False\n");
    assert_output("print \"abc\" < \"abd\"\n", "True\n");
    assert_output("print False < True\n", "True\n");
}

#[test]
fn comparing_mismatched_types_fails() {
    assert_failure("print 1 == \"one\"\n");
    assert_failure("print 1 < \"a\"\n");
    assert_failure("print None == 1\n");
}

#[test]
fn none_equals_none() {
    assert_output("x = None\nprint x == None\n", "True\n");
}

#[test]
fn classes_fields_and_methods() {
    let source = "class Counter:\n\
                  \x20 def __init__(self, start):\n\
                  \x20   self.value = start\n\
                  \x20 def increment(self):\n\
                  \x20   self.value = self.value + 1\n\
                  \x20   return self.value\n\
                  \n\
                  c = Counter(10)\n\
                  print c.increment()\n\
                  print c.increment()\n\
                  print c.value\n";
    assert_output(source, "11\n12\n12\n");
}

#[test]
fn single_inheritance_and_override() {
    let source = "class A:\n\
                  \x20 def f(self):\n\
                  \x20   return \"A\"\n\
                  \n\
                  class B(A):\n\
                  \x20 def f(self):\n\
                  \x20   return \"B\"\n\
                  \n\
                  print B().f()\n";
    assert_output(source, "B\n");
}

#[test]
fn parent_methods_are_inherited() {
    let source = "class A:\n\
                  \x20 def greet(self):\n\
                  \x20   return \"hi\"\n\
                  \n\
                  class B(A):\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  print B().greet()\n";
    assert_output(source, "hi\n");
}

#[test]
fn method_lookup_stops_at_the_parent() {
    // Lookup ascends exactly one level: a grandparent method is unreachable,
    // and the failed call surfaces as None through the call silencer.
    let source = "class A:\n\
                  \x20 def f(self):\n\
                  \x20   return 1\n\
                  \n\
                  class B(A):\n\
                  \x20 def g(self):\n\
                  \x20   return 2\n\
                  \n\
                  class C(B):\n\
                  \x20 def h(self):\n\
                  \x20   return 3\n\
                  \n\
                  c = C()\n\
                  print c.g()\n\
                  print c.f()\n";
    assert_output(source, "2\nNone\n");
}

#[test]
fn dunder_add_dispatch() {
    let source = "class V:\n\
                  \x20 def __add__(self, other):\n\
                  \x20   return self.x + other.x\n\
                  \n\
                  v1 = V()\n\
                  v1.x = 2\n\
                  v2 = V()\n\
                  v2.x = 3\n\
                  print v1 + v2\n";
    assert_output(source, "5\n");
}

#[test]
fn add_without_dunder_fails() {
    let source = "class E:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  x = E() + 1\n";
    assert_failure(source);
}

#[test]
fn instantiation_site_owns_its_instance() {
    // One `V()` site evaluated twice hands out the same object.
    let source = "class V:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  class Factory:\n\
                  \x20 def build(self):\n\
                  \x20   return V()\n\
                  \n\
                  f = Factory()\n\
                  a = f.build()\n\
                  b = f.build()\n\
                  a.x = 7\n\
                  print b.x\n";
    assert_output(source, "7\n");
}

#[test]
fn init_with_mismatched_arity_is_skipped() {
    let source = "class P:\n\
                  \x20 def __init__(self, a):\n\
                  \x20   self.a = a\n\
                  \n\
                  p = P()\n\
                  print p.a\n";
    // __init__ never ran, so the field read fails.
    assert_failure(source);
}

#[test]
fn method_call_on_non_instance_yields_none() {
    assert_output("x = 5\nprint x.f()\n", "None\n");
}

#[test]
fn failed_method_call_yields_none() {
    let source = "class T:\n\
                  \x20 def f(self, a):\n\
                  \x20   return a\n\
                  \n\
                  t = T()\n\
                  print t.f()\n";
    assert_output(source, "None\n");
}

#[test]
fn str_dunder_controls_printing() {
    let source = "class Greeting:\n\
                  \x20 def __init__(self, who):\n\
                  \x20   self.who = who\n\
                  \x20 def __str__(self):\n\
                  \x20   return \"Hello, \" + self.who\n\
                  \n\
                  print Greeting(\"world\")\n";
    assert_output(source, "Hello, world\n");
}

#[test]
fn instances_without_str_print_their_identity() {
    let source = "class Empty:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  print Empty()\n";
    let output = run_and_capture(source);
    assert!(output.starts_with("<Empty object at 0x"), "got: {output}");
    assert!(output.ends_with(">\n"), "got: {output}");
}

#[test]
fn str_builtin() {
    assert_output("print str(42) + \"!\"\n", "42!\n");
    assert_output("print str(True)\n", "True\n");
    assert_output("print str(None)\n", "None\n");
}

#[test]
fn str_builtin_follows_str_dunder() {
    let source = "class N:\n\
                  \x20 def __str__(self):\n\
                  \x20   return 7\n\
                  \n\
                  print str(N()) + \"!\"\n";
    assert_output(source, "7!\n");
}

#[test]
fn str_builtin_falls_back_to_identity() {
    let source = "class M:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  print str(M()) + \"!\"\n";
    let output = run_and_capture(source);
    assert!(output.starts_with("<M object at 0x"), "got: {output}");
    assert!(output.ends_with(">!\n"), "got: {output}");
}

#[test]
fn eq_and_lt_dunder_dispatch() {
    let source = "class Box:\n\
                  \x20 def __init__(self, v):\n\
                  \x20   self.v = v\n\
                  \x20 def __eq__(self, other):\n\
                  \x20   return self.v == other.v\n\
                  \x20 def __lt__(self, other):\n\
                  \x20   return self.v < other.v\n\
                  \n\
                  a = Box(1)\n\
                  b = Box(2)\n\
                  print a == b\n\
                  print a < b\n\
                  print a > b\n\
                  print a != b\n\
                  print a <= b\n\
                  print a >= b\n";
    assert_output(source, "False\nTrue\nFalse\nTrue\nTrue\nFalse\n");
}

#[test]
fn print_with_multiple_arguments() {
    assert_output("print 1, \"two\", True, None\n", "1 two True None\n");
}

#[test]
fn print_resolves_strings_through_the_closure() {
    assert_output("x = 99\nprint \"x\"\n", "99\n");
    // The re-resolution applies recursively through string values.
    assert_output("y = \"x\"\nx = 5\nprint y\n", "5\n");
}

#[test]
fn bare_print_emits_a_newline() {
    assert_output("print\nprint 1\n", "\n1\n");
}

#[test]
fn nested_blocks_dedent_together() {
    let source = "x = 5\n\
                  if x:\n\
                  \x20 if x < 10:\n\
                  \x20   print \"small\"\n\
                  print \"done\"\n";
    assert_output(source, "small\ndone\n");
}

#[test]
fn early_return_from_a_branch() {
    let source = "class Check:\n\
                  \x20 def test(self, flag):\n\
                  \x20   if flag:\n\
                  \x20     return 1\n\
                  \x20   return 0\n\
                  \n\
                  c = Check()\n\
                  print c.test(True)\n\
                  print c.test(False)\n";
    assert_output(source, "1\n0\n");
}

#[test]
fn bare_return_yields_none() {
    let source = "class Q:\n\
                  \x20 def nothing(self):\n\
                  \x20   return\n\
                  \n\
                  print Q().nothing()\n";
    assert_output(source, "None\n");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("print 1 / 0\n");
    assert_failure("x = 1 / 0\n");
}

#[test]
fn undefined_variable_is_an_error() {
    assert_failure("print missing\n");
}

#[test]
fn return_outside_a_method_is_rejected() {
    assert_failure("return 1\n");
}

#[test]
fn field_access_follows_dotted_paths() {
    let source = "class Inner:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  class Outer:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  o = Outer()\n\
                  o.child = Inner()\n\
                  o.child.tag = 9\n\
                  print o.child.tag\n";
    assert_output(source, "9\n");
}

#[test]
fn dotted_path_stops_at_non_instances() {
    // The walk returns the last resolved value once it hits a non-instance;
    // the remaining components are ignored.
    assert_output("x = 5\nprint x.y.z\n", "5\n");
}

#[test]
fn comments_are_stripped() {
    let source = "x = 1 # set x\n\
                  # a full-line comment\n\
                  print x # show it\n";
    assert_output(source, "1\n");
}

#[test]
fn string_escapes_decode() {
    assert_output("print 'a\\tb'\n", "a\tb\n");
    assert_output("print 'one\\ntwo'\n", "one\ntwo\n");
    assert_output("print \"It's fine\"\n", "It's fine\n");
}

#[test]
fn instances_and_classes_are_falsy() {
    let source = "class F:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  if F():\n\
                  \x20 print \"truthy\"\n\
                  print \"end\"\n";
    assert_output(source, "end\n");
}

#[test]
fn class_objects_print_their_name() {
    let source = "class A:\n\
                  \x20 def noop(self):\n\
                  \x20   return None\n\
                  \n\
                  print A\n";
    assert_output(source, "Class A\n");
}

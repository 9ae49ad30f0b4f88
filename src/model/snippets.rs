// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Langsheet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Langsheet and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Authored snippet content.
//!
//! Every entry is a literal, reproduced byte for byte by [`SnippetTable::lookup`].
//!
//! [`SnippetTable::lookup`]: super::SnippetTable::lookup

use super::{Language, Topic};

pub(crate) const SNIPPETS: &[(Topic, Language, &str)] = &[
    // Basics
    (
        Topic::Basics,
        Language::Java,
        r#"public class Main {
    public static void main(String[] args) {
        int a = 10;
        String s = "hi";
        System.out.println(a + " " + s);
        for (int i = 0; i < 5; i++) {
            System.out.println(i);
        }
    }
}"#,
    ),
    (
        Topic::Basics,
        Language::Kotlin,
        r#"fun main() {
    val a = 10
    val s = "hi"
    println("$a $s")
    for (i in 0..4) {
        println(i)
    }
}"#,
    ),
    (
        Topic::Basics,
        Language::Go,
        r#"package main

import "fmt"

func main() {
    a := 10
    s := "hi"
    fmt.Println(a, s)
    for i := 0; i < 5; i++ {
        fmt.Println(i)
    }
}"#,
    ),
    (
        Topic::Basics,
        Language::Python,
        r#"a = 10
s = 'hi'
print(a, s)
for i in range(5):
    print(i)"#,
    ),
    (
        Topic::Basics,
        Language::TypeScript,
        r#"let a: number = 10;
const s: string = "hi";
console.log(a, s);
for (let i = 0; i < 5; i++) {
    console.log(i);
}"#,
    ),
    // Datatypes
    (
        Topic::Datatypes,
        Language::Java,
        r#"import java.util.*;

public class Main {
    public static void main(String[] args) {
        // Primitives with explicit init (defaults shown in comments for fields)
        int i = 0;          // default for fields: 0
        double d = 0.0;     // default: 0.0
        boolean b = false;  // default: false
        char c = '\u0000'; // default: null char

        // Reference types
        String s = null;    // default: null

        // Arrays, Lists, Maps
        int[] nums = {1, 2, 3};
        for (int n : nums) System.out.println(n);

        List<String> list = new ArrayList<>(List.of("Alice", "Bob"));
        list.forEach(System.out::println);

        Map<String, Integer> ages = new HashMap<>();
        ages.put("Alice", 25); ages.put("Bob", 30);
        ages.forEach((k,v) -> System.out.println(k + " => " + v));
    }
}"#,
    ),
    (
        Topic::Datatypes,
        Language::Kotlin,
        r#"fun main() {
    // Kotlin types: Int, Double, Boolean, Char, String
    // Non-nullable by default, use ? for nullable
    var i: Int = 0
    var d: Double = 0.0
    var b: Boolean = false
    var c: Char = '\u0000'
    var s: String? = null  // nullable type

    println("$i $d $b $c $s")

    // Collections: List, MutableList, Map, MutableMap
    val nums = listOf(1, 2, 3)
    nums.forEach { println(it) }

    val names = mutableListOf("Alice", "Bob")
    names.add("Charlie")
    names.forEach { println(it) }

    val ages = mutableMapOf("Alice" to 25, "Bob" to 30)
    ages["Charlie"] = 28
    ages.forEach { (k, v) -> println("$k => $v") }

    // Functional example
    val adults = ages.filter { it.value >= 28 }
    println("Filtered: $adults")
}"#,
    ),
    (
        Topic::Datatypes,
        Language::Go,
        r#"package main

import "fmt"

func main() {
    // Zero values (defaults) in Go when declared with 'var'
    var i int        // 0
    var f float64    // 0
    var b bool       // false
    var c rune       // 0 (null rune)
    var s string     // ""

    fmt.Println(i, f, b, c, s)

    // Collections
    nums := [3]int{1, 2, 3}           // array (fixed size)
    for _, n := range nums { fmt.Println(n) }

    names := []string{"Alice", "Bob"} // slice (dynamic)
    names = append(names, "Charlie")
    for _, name := range names { fmt.Println(name) }

    ages := map[string]int{"Alice": 25, "Bob": 30}
    ages["Charlie"] = 28
    for k, v := range ages { fmt.Printf("%s => %d\n", k, v) }
}"#,
    ),
    (
        Topic::Datatypes,
        Language::Python,
        r#"# Python datatypes and collections
nums = [1, 2, 3]
for n in nums:
    print(n)
people = ['Alice', 'Bob']
for name in people:
    print(name)
ages = {'Alice': 25, 'Bob': 30}
for k, v in ages.items():
    print(f"{k} => {v}")
# Functional example
adults = {k: v for k, v in ages.items() if v >= 28}
print('Filtered:', adults)"#,
    ),
    (
        Topic::Datatypes,
        Language::TypeScript,
        r#"// TypeScript datatypes and collections
// Primitives: number, string, boolean, null, undefined
let i: number = 0;
let d: number = 0.0;
let b: boolean = false;
let s: string | null = null;  // union type for nullable

console.log(i, d, b, s);

// Arrays and collections
const nums: number[] = [1, 2, 3];
nums.forEach(n => console.log(n));

const names: string[] = ["Alice", "Bob"];
names.push("Charlie");
names.forEach(name => console.log(name));

// Map (key-value pairs)
const ages = new Map<string, number>([
    ["Alice", 25],
    ["Bob", 30]
]);
ages.set("Charlie", 28);
ages.forEach((v, k) => console.log(`${k} => ${v}`));

// Functional example
const ageArray = Array.from(ages.entries());
const adults = ageArray.filter(([k, v]) => v >= 28);
console.log('Filtered:', adults);"#,
    ),
    // Visibility
    (
        Topic::Visibility,
        Language::Java,
        r#"class Utils {
    public static String PUBLIC_VAR = "I'm public!";
    private static String PRIVATE_VAR = "I'm private!";
    public static void printPrivate() { System.out.println(PRIVATE_VAR); }
}

public class Main {
    public static void main(String[] args) {
        System.out.println(Utils.PUBLIC_VAR);
        Utils.printPrivate();
    }
}"#,
    ),
    (
        Topic::Visibility,
        Language::Kotlin,
        r#"// ========================
//  VISIBILITY IN KOTLIN
// ========================
// - public: visible everywhere (default for top-level)
// - private: visible only in the same file/class
// - internal: visible within the same module
// - protected: visible in subclasses

object Utils {
    const val PUBLIC_VAR = "I'm public!"
    private const val PRIVATE_VAR = "I'm private!"
    fun printPrivate() { println(PRIVATE_VAR) }
}

class User(val name: String, private val age: Int) {
    fun showName() { println("Name: $name") }
    private fun showAge() { println("Age: $age") }
}

fun main() {
    println(Utils.PUBLIC_VAR)
    Utils.printPrivate()

    val u = User("Alice", 30)
    println(u.name)  // OK (public)
    // println(u.age) // ❌ cannot access private property
    u.showName()
    // u.showAge()    // ❌ cannot call private method
}"#,
    ),
    (
        Topic::Visibility,
        Language::Go,
        r#"package main

import "fmt"

// ========================
//  VISIBILITY IN GO
// ========================
// - Identifiers starting with uppercase letters are exported (public).
// - Lowercase identifiers are unexported (private) to the package.
// - Applies to variables, constants, functions, structs, and fields.

// Package-level variables
var PublicVar = "I'm public!"
var privateVar = "I'm private!"

// Functions
func PrintPrivate() { fmt.Println(privateVar) } // Exported
func printHidden() { fmt.Println("hidden function") } // Unexported

// Structs and Fields
type User struct {
    Name string   // exported field
    age  int      // unexported field
}

func (u User) ShowName() { fmt.Println("Name:", u.Name) }
func (u User) showAge() { fmt.Println("Age:", u.age) }

func main() {
    fmt.Println(PublicVar)
    PrintPrivate()

    // Accessing struct fields
    u := User{Name: "Alice", age: 30}
    fmt.Println(u.Name) // OK (public)
    // fmt.Println(u.age) // ❌ cannot access unexported field
    u.ShowName()
    // u.showAge() // ❌ cannot call unexported method outside package
}"#,
    ),
    (
        Topic::Visibility,
        Language::Python,
        r#"class Utils:
    PUBLIC_VAR = "I'm public!"
    __PRIVATE_VAR = "I'm private!"  # name-mangled (convention)
    @staticmethod
    def print_private():
        print(Utils.__PRIVATE_VAR)

print(Utils.PUBLIC_VAR)
Utils.print_private()"#,
    ),
    (
        Topic::Visibility,
        Language::TypeScript,
        r#"// ========================
//  VISIBILITY IN TYPESCRIPT
// ========================
// - public: accessible everywhere (default)
// - private: only within the class
// - protected: within class and subclasses
// - readonly: cannot be modified after initialization

class Utils {
    public static readonly PUBLIC_VAR = "I'm public!";
    private static readonly PRIVATE_VAR = "I'm private!";
    
    public static printPrivate() {
        console.log(Utils.PRIVATE_VAR);
    }
}

class User {
    constructor(
        public name: string,
        private age: number
    ) {}
    
    showName() { console.log(`Name: ${this.name}`); }
    private showAge() { console.log(`Age: ${this.age}`); }
}

console.log(Utils.PUBLIC_VAR);
Utils.printPrivate();

const u = new User("Alice", 30);
console.log(u.name);  // OK (public)
// console.log(u.age);  // ❌ cannot access private property
u.showName();
// u.showAge();  // ❌ cannot call private method"#,
    ),
    // Functions
    (
        Topic::Functions,
        Language::Java,
        r#"import java.util.function.Function;

// Basics + overloading (default-like) + lambda & closure
class Main {
    static int add(int a, int b) { return a + b; }
    static int add(int a) { return add(a, 10); } // default via overload

    public static void main(String[] args) {
        System.out.println(add(5));
        System.out.println(add(5, 3));

        Runnable r = () -> System.out.println("Lambda!");
        r.run();

        int base = 10;
        Function<Integer,Integer> adder = x -> x + base; // closure
        System.out.println(adder.apply(5));
    }
}"#,
    ),
    (
        Topic::Functions,
        Language::Kotlin,
        r#"// Functions with default parameters, lambdas, and closures
fun add(a: Int, b: Int = 10): Int = a + b

fun makeAdder(base: Int): (Int) -> Int {
    return { x -> x + base }  // closure
}

fun main() {
    println(add(5))         // uses default b=10
    println(add(5, 3))

    // Lambda
    val r: () -> Unit = { println("Lambda!") }
    r()

    // Closure
    val add5 = makeAdder(5)
    println(add5(10))

    // Anonymous function
    val greet = { name: String -> println("Hello, $name") }
    greet("Kotlin Dev")
}"#,
    ),
    (
        Topic::Functions,
        Language::Go,
        r#"package main

import "fmt"

func add(a int, b int) int { return a + b }
func addDefault(a int) int { return add(a, 10) } // simulate default

// Closure maker
func makeAdder(base int) func(int) int {
    return func(x int) int { return x + base }
}

func main() {
    fmt.Println(addDefault(5))
    fmt.Println(add(5, 3))

    greet := func(name string) { fmt.Println("Hello,", name) } // anon func
    greet("Go Dev")

    add5 := makeAdder(5)
    fmt.Println(add5(10))
}"#,
    ),
    (
        Topic::Functions,
        Language::Python,
        r#"# Defaults, lambda, closures
def add(a, b=10):
    return a + b

print(add(5))
print(add(5, 3))

# Lambdas
print((lambda x, y=10: x + y)(5))

# Closure
def make_adder(base):
    def adder(x):
        return x + base
    return adder

add5 = make_adder(5)
print(add5(10))"#,
    ),
    (
        Topic::Functions,
        Language::TypeScript,
        r#"// Functions with default parameters, arrow functions, and closures
function add(a: number, b: number = 10): number {
    return a + b;
}

console.log(add(5));         // uses default b=10
console.log(add(5, 3));

// Arrow function (lambda)
const r = () => console.log("Lambda!");
r();

// Closure
function makeAdder(base: number): (x: number) => number {
    return (x: number) => x + base;
}

const add5 = makeAdder(5);
console.log(add5(10));

// Anonymous function
const greet = (name: string) => console.log(`Hello, ${name}`);
greet("TypeScript Dev");"#,
    ),
    // Objects
    (
        Topic::Objects,
        Language::Java,
        r#"class Person { String name; int age; void greet() { System.out.println("Hi, I'm " + name); } }
class Main { public static void main(String[] args){ Person p = new Person(); p.name="Alice"; p.age=30; p.greet(); } }"#,
    ),
    (
        Topic::Objects,
        Language::Kotlin,
        r#"// Data class with constructor and methods
data class Person(val name: String, val age: Int) {
    fun greet() { println("Hi, my name is $name") }
}

fun main() {
    Person("Alice", 30).greet()
}"#,
    ),
    (
        Topic::Objects,
        Language::Go,
        r#"package main

import "fmt"

// Struct + method (receiver)
type Person struct { Name string; Age int }
func (p Person) Greet() { fmt.Println("Hi, my name is", p.Name) }

func main() { Person{Name: "Alice", Age: 30}.Greet() }"#,
    ),
    (
        Topic::Objects,
        Language::Python,
        r#"class Person:
    def __init__(self, name, age):
        self.name = name; self.age = age
    def greet(self):
        print(f"Hi, my name is {self.name}")

Person('Alice', 30).greet()"#,
    ),
    (
        Topic::Objects,
        Language::TypeScript,
        r#"// Class with constructor and methods
class Person {
    name: string;
    age: number;
    
    constructor(name: string, age: number) {
        this.name = name;
        this.age = age;
    }
    
    greet() {
        console.log(`Hi, my name is ${this.name}`);
    }
}

new Person("Alice", 30).greet();"#,
    ),
    // Interfaces
    (
        Topic::Interfaces,
        Language::Java,
        r#"interface Animal { void speak(); }
class Dog implements Animal { public void speak(){ System.out.println("Woof"); } }
class Main { public static void main(String[] args){ Animal a = new Dog(); a.speak(); } }"#,
    ),
    (
        Topic::Interfaces,
        Language::Kotlin,
        r#"// Interfaces in Kotlin
interface Animal {
    fun speak()
}

class Dog : Animal {
    override fun speak() { println("Woof") }
}

fun main() {
    val a: Animal = Dog()
    a.speak()
}"#,
    ),
    (
        Topic::Interfaces,
        Language::Go,
        r#"package main

import "fmt"

type Animal interface { Speak() }
type Dog struct{}
func (d Dog) Speak(){ fmt.Println("Woof!") }
func main(){ var a Animal = Dog{}; a.Speak() }"#,
    ),
    (
        Topic::Interfaces,
        Language::Python,
        r#"from abc import ABC, abstractmethod
class Animal(ABC):
    @abstractmethod
    def speak(self): ...
class Dog(Animal):
    def speak(self): print('Woof')
Dog().speak()"#,
    ),
    (
        Topic::Interfaces,
        Language::TypeScript,
        r#"// Interfaces in TypeScript
interface Animal {
    speak(): void;
}

class Dog implements Animal {
    speak() {
        console.log("Woof");
    }
}

const a: Animal = new Dog();
a.speak();"#,
    ),
    // Gof
    (
        Topic::Gof,
        Language::Java,
        r#"// Strategy (simplified)
interface PaymentStrategy { void pay(int amount); }
class CreditCard implements PaymentStrategy { public void pay(int a){ System.out.println("Paid "+a+" by card"); } }
class Main { public static void main(String[] args){ new CreditCard().pay(50); } }"#,
    ),
    (
        Topic::Gof,
        Language::Kotlin,
        r#"// Strategy pattern in Kotlin
interface PaymentStrategy {
    fun pay(amount: Int)
}

class CreditCard : PaymentStrategy {
    override fun pay(amount: Int) {
        println("Paid $amount by card")
    }
}

fun main() {
    CreditCard().pay(50)
}"#,
    ),
    (
        Topic::Gof,
        Language::Go,
        r#"package main

import "fmt"

type PaymentStrategy interface{ Pay(int) }
type CreditCard struct{}
func (c CreditCard) Pay(a int){ fmt.Println("Paid", a, "by card") }
func main(){ CreditCard{}.Pay(50) }"#,
    ),
    (
        Topic::Gof,
        Language::Python,
        r#"class PaymentStrategy:
    def pay(self, amount): ...
class CreditCard(PaymentStrategy):
    def pay(self, amount): print(f'Paid {amount} by card')
CreditCard().pay(50)"#,
    ),
    (
        Topic::Gof,
        Language::TypeScript,
        r#"// Strategy pattern in TypeScript
interface PaymentStrategy {
    pay(amount: number): void;
}

class CreditCard implements PaymentStrategy {
    pay(amount: number) {
        console.log(`Paid ${amount} by card`);
    }
}

new CreditCard().pay(50);"#,
    ),
    // Errors
    (
        Topic::Errors,
        Language::Java,
        r#"class Main {
    static void risky() throws Exception { throw new Exception("oops"); }
    public static void main(String[] args){
        try { risky(); } catch (Exception e) { System.out.println(e.getMessage()); }
    }
}"#,
    ),
    (
        Topic::Errors,
        Language::Kotlin,
        r#"// Error handling in Kotlin
fun risky(): String {
    throw Exception("oops")
}

// Using Result type for more functional approach
fun riskyResult(): Result<String> {
    return Result.failure(Exception("oops"))
}

fun main() {
    // Traditional try-catch
    try {
        risky()
    } catch (e: Exception) {
        println(e.message)
    }

    // Result-based approach
    riskyResult().onFailure { println(it.message) }
}"#,
    ),
    (
        Topic::Errors,
        Language::Go,
        r#"package main

import (
  "errors"
  "fmt"
)

func risky() (string, error) { return "", errors.New("oops") }

func main(){
  v, err := risky()
  if err != nil { fmt.Println(err); return }
  fmt.Println(v)
}"#,
    ),
    (
        Topic::Errors,
        Language::Python,
        r#"try:
    raise Exception('oops')
except Exception as e:
    print(e)"#,
    ),
    (
        Topic::Errors,
        Language::TypeScript,
        r#"// Error handling in TypeScript
function risky(): string {
    throw new Error("oops");
}

try {
    risky();
} catch (e) {
    if (e instanceof Error) {
        console.log(e.message);
    }
}

// Result type pattern (functional approach)
type Result<T, E = Error> = 
    | { ok: true; value: T }
    | { ok: false; error: E };

function riskyResult(): Result<string> {
    return { ok: false, error: new Error("oops") };
}

const result = riskyResult();
if (!result.ok) {
    console.log(result.error.message);
}"#,
    ),
    // Concurrency
    (
        Topic::Concurrency,
        Language::Java,
        r#"class Main { public static void main(String[] args){ new Thread(() -> System.out.println("Hello")).start(); } }"#,
    ),
    (
        Topic::Concurrency,
        Language::Kotlin,
        r#"// Concurrency in Kotlin with coroutines
import kotlinx.coroutines.*

fun main() = runBlocking {
    // Launch a coroutine
    launch {
        println("Hello from coroutine")
    }

    // Traditional thread
    Thread { println("Hello from thread") }.start()

    delay(100)  // wait for coroutine to complete
}"#,
    ),
    (
        Topic::Concurrency,
        Language::Go,
        r#"package main

import (
  "fmt"
  "time"
)
func main(){ go func(){ fmt.Println("Hello") }(); time.Sleep(time.Second) }"#,
    ),
    (
        Topic::Concurrency,
        Language::Python,
        r#"import threading
threading.Thread(target=lambda: print('Hello')).start()"#,
    ),
    (
        Topic::Concurrency,
        Language::TypeScript,
        r#"// Concurrency in TypeScript with async/await and Promises
// Async function example
async function delay(ms: number): Promise<void> {
    return new Promise(resolve => setTimeout(resolve, ms));
}

async function main() {
    console.log("Start");
    
    // Promise-based concurrency
    Promise.resolve().then(() => console.log("Hello from Promise"));
    
    // Async/await
    await delay(100);
    console.log("After delay");
}

main();

// Worker threads (Node.js)
// import { Worker } from 'worker_threads';
// new Worker('./worker.js');"#,
    ),
];
